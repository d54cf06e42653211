//! Fake Speech Synthesizer - 用于测试的合成客户端
//!
//! 不发起网络请求，按配置返回固定音频、空响应或服务错误

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::application::ports::{
    SpeechSynthesizerPort, SynthesisError, SynthesisRequest, SynthesisResponse,
};

#[derive(Debug, Clone)]
enum FakeBehavior {
    Audio(Vec<u8>),
    NoAudio,
    Fail(String),
}

/// Fake Speech Synthesizer
pub struct FakeSpeechSynthesizer {
    behavior: FakeBehavior,
    calls: Arc<AtomicUsize>,
}

impl FakeSpeechSynthesizer {
    /// 始终返回给定音频
    pub fn with_audio(audio: Vec<u8>) -> Self {
        Self::new(FakeBehavior::Audio(audio))
    }

    /// 返回成功响应，但不带音频流
    pub fn without_audio() -> Self {
        Self::new(FakeBehavior::NoAudio)
    }

    /// 模拟服务拒绝请求
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(FakeBehavior::Fail(message.into()))
    }

    fn new(behavior: FakeBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// 调用次数计数器
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeSpeechSynthesizer {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            text_len = request.text.len(),
            voice_id = %request.voice_id,
            "FakeSpeechSynthesizer: returning canned response"
        );

        match &self.behavior {
            FakeBehavior::Audio(audio) => Ok(SynthesisResponse {
                audio_stream: Some(audio.clone()),
                content_type: Some(request.output_format.mime_type().to_string()),
                request_characters: Some(request.text.chars().count() as u64),
            }),
            FakeBehavior::NoAudio => Ok(SynthesisResponse::default()),
            FakeBehavior::Fail(message) => Err(SynthesisError::ServiceError(message.clone())),
        }
    }

    fn name(&self) -> &str {
        "fake"
    }
}
