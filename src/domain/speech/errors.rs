//! Speech Context - Errors

use thiserror::Error;

use super::SessionState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpeechError {
    #[error("Dialog must be a string: {0}")]
    NotText(String),

    #[error("合成文本不能为空")]
    EmptyText,

    #[error("无效的音色: {0}")]
    InvalidVoice(String),

    #[error("不支持的输出格式: {0}")]
    UnsupportedFormat(String),

    #[error("cannot {action} while session is {state}")]
    InvalidTransition {
        state: SessionState,
        action: &'static str,
    },
}
