//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_player;
mod audio_storage;
mod speech_synthesizer;

pub use audio_player::{AudioPlayerPort, PlayerError};
pub use audio_storage::{AudioStorageError, AudioStoragePort};
pub use speech_synthesizer::{
    SpeechSynthesizerPort, SynthesisError, SynthesisRequest, SynthesisResponse,
};
