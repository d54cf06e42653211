//! TTS Adapter - 语音合成客户端实现

mod fake_synthesizer;
mod polly_client;

pub use fake_synthesizer::FakeSpeechSynthesizer;
pub use polly_client::*;
