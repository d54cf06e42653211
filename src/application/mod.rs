//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechSynthesizer、AudioStorage、AudioPlayer）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - workflow: 分步语音合成工作流
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod workflow;

// Re-exports
pub use commands::{
    handlers::{SpeakTextHandler, SpeakTextResponse},
    SpeakText,
};

pub use error::ApplicationError;

pub use ports::{
    AudioPlayerPort, AudioStorageError, AudioStoragePort, PlayerError, SpeechSynthesizerPort,
    SynthesisError, SynthesisRequest, SynthesisResponse,
};

pub use queries::{
    handlers::{
        ColorGlyphResponse, DrawRandomNumberHandler, EmojizeTextHandler, LookupColorGlyphHandler,
        RandomNumberResponse,
    },
    DrawRandomNumber, EmojizeText, LookupColorGlyph,
};

pub use workflow::{SpeechSettings, SpeechWorkflow};
