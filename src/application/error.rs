//! 应用层错误定义
//!
//! 统一的命令/查询/工作流错误类型

use thiserror::Error;

use crate::application::ports::{AudioStorageError, PlayerError, SynthesisError};
use crate::domain::glyph::GlyphError;
use crate::domain::sampler::SamplerError;
use crate::domain::speech::SpeechError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 参数无效（区间颠倒、颜色名含非字母字符、空文本）
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// 输入类型不符
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// 调用顺序错误
    #[error("Precondition violated: {0}")]
    PreconditionViolated(String),

    /// 远程服务调用失败
    #[error("Service error: {0}")]
    ServiceError(String),

    /// 响应缺少必需字段
    #[error("Protocol error: {0}")]
    ProtocolError(String),

    /// 本地文件读写失败
    #[error("IO error: {0}")]
    IoError(String),

    /// 播放器进程启动失败
    #[error("Playback error: {0}")]
    PlaybackError(String),
}

impl ApplicationError {
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::ProtocolError(message.into())
    }
}

impl From<SamplerError> for ApplicationError {
    fn from(err: SamplerError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

impl From<GlyphError> for ApplicationError {
    fn from(err: GlyphError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

impl From<SpeechError> for ApplicationError {
    fn from(err: SpeechError) -> Self {
        match err {
            SpeechError::NotText(_) => Self::TypeMismatch(err.to_string()),
            SpeechError::InvalidTransition { .. } => Self::PreconditionViolated(err.to_string()),
            SpeechError::EmptyText
            | SpeechError::InvalidVoice(_)
            | SpeechError::UnsupportedFormat(_) => Self::InvalidArgument(err.to_string()),
        }
    }
}

impl From<SynthesisError> for ApplicationError {
    fn from(err: SynthesisError) -> Self {
        Self::ServiceError(err.to_string())
    }
}

impl From<AudioStorageError> for ApplicationError {
    fn from(err: AudioStorageError) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<PlayerError> for ApplicationError {
    fn from(err: PlayerError) -> Self {
        Self::PlaybackError(err.to_string())
    }
}
