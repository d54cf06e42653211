//! Speech Synthesizer Port - 语音合成服务抽象
//!
//! 定义远程语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::speech::{OutputFormat, VoiceId};

/// 合成服务错误
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 要合成的文本
    pub text: String,
    /// 输出格式，默认 mp3
    pub output_format: OutputFormat,
    /// 音色 ID
    pub voice_id: VoiceId,
}

/// 合成响应
///
/// `audio_stream` 缺失或为空由调用方判定为协议错误
#[derive(Debug, Clone, Default)]
pub struct SynthesisResponse {
    pub audio_stream: Option<Vec<u8>>,
    pub content_type: Option<String>,
    /// 服务计费的字符数
    pub request_characters: Option<u64>,
}

/// Speech Synthesizer Port
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 发送一次合成请求，不重试
    async fn synthesize(&self, request: SynthesisRequest)
        -> Result<SynthesisResponse, SynthesisError>;

    /// 用于日志的服务名称
    fn name(&self) -> &str;
}
