//! Audio Player Port - 播放能力抽象
//!
//! 测试中用 no-op 实现替换，避免真正启动系统进程

use std::path::Path;
use thiserror::Error;

/// 播放错误，只覆盖进程启动失败，不反映播放结果
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Failed to launch {opener}: {reason}")]
    LaunchFailed { opener: String, reason: String },

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Audio Player Port
pub trait AudioPlayerPort: Send + Sync {
    /// 用系统默认程序打开音频文件，不等待播放结束
    fn play(&self, path: &Path) -> Result<(), PlayerError>;
}
