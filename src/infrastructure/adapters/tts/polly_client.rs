//! Polly Client - 调用 Amazon Polly SynthesizeSpeech
//!
//! 实现 SpeechSynthesizerPort trait
//!
//! 外部 API:
//! POST {endpoint}/v1/speech
//! Request: {"OutputFormat": "mp3", "Text": "...", "VoiceId": "Joanna"}  (JSON)
//! Response: audio/mpeg binary, `x-amzn-RequestCharacters` header
//!
//! 请求签名与凭证不在这里处理，由 endpoint 前面的签名代理或凭证链负责。

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{
    SpeechSynthesizerPort, SynthesisError, SynthesisRequest, SynthesisResponse,
};
use crate::domain::speech::{OutputFormat, VoiceId};

const REQUEST_CHARACTERS_HEADER: &str = "x-amzn-RequestCharacters";
const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";

/// SynthesizeSpeech 请求体 (JSON)
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SynthesizeSpeechBody<'a> {
    output_format: OutputFormat,
    text: &'a str,
    voice_id: &'a VoiceId,
}

/// Polly 客户端配置
#[derive(Debug, Clone)]
pub struct PollyClientConfig {
    /// 服务基础 URL
    pub endpoint: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for PollyClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://polly.us-east-1.amazonaws.com".to_string(),
            timeout_secs: 30,
        }
    }
}

impl PollyClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Polly HTTP 客户端
pub struct PollyClient {
    client: Client,
    config: PollyClientConfig,
}

impl PollyClient {
    pub fn new(config: PollyClientConfig) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SynthesisError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn speech_url(&self) -> String {
        format!("{}/v1/speech", self.config.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl SpeechSynthesizerPort for PollyClient {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SynthesisError> {
        let body = SynthesizeSpeechBody {
            output_format: request.output_format,
            text: &request.text,
            voice_id: &request.voice_id,
        };

        tracing::debug!(
            url = %self.speech_url(),
            text_len = request.text.len(),
            voice_id = %request.voice_id,
            "Sending SynthesizeSpeech request"
        );

        let response = self
            .client
            .post(self.speech_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SynthesisError::Timeout
                } else if e.is_connect() {
                    SynthesisError::NetworkError(format!("Cannot connect to Polly: {}", e))
                } else {
                    SynthesisError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_type = response
                .headers()
                .get(ERROR_TYPE_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown")
                .to_string();
            let error_text = response.text().await.unwrap_or_default();
            return Err(SynthesisError::ServiceError(format!(
                "HTTP {} ({}): {}",
                status, error_type, error_text
            )));
        }

        let headers = response.headers();
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let request_characters = headers
            .get(REQUEST_CHARACTERS_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        let audio = response
            .bytes()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SynthesisError::Timeout
                } else {
                    SynthesisError::NetworkError(format!("Failed to read audio: {}", e))
                }
            })?
            .to_vec();

        // JSON 响应体不是音频流
        let is_json = content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/json"));
        let audio_stream = (!is_json && !audio.is_empty()).then_some(audio);

        tracing::info!(
            content_type = ?content_type,
            request_characters = ?request_characters,
            audio_size = audio_stream.as_ref().map_or(0, Vec::len),
            "SynthesizeSpeech completed"
        );

        Ok(SynthesisResponse {
            audio_stream,
            content_type,
            request_characters,
        })
    }

    fn name(&self) -> &str {
        "Amazon Polly"
    }
}
