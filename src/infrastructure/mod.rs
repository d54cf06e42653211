//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现，以及终端交互

pub mod adapters;
pub mod console;

pub use adapters::{FileAudioStorage, NoopAudioPlayer, PollyClient, SystemAudioPlayer};
pub use console::ColorPrompt;
