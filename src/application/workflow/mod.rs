//! 应用层 - 分步工作流

mod speech_workflow;

pub use speech_workflow::{SpeechSettings, SpeechWorkflow};
