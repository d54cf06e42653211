//! Audio Storage Port - 出站端口
//!
//! 把合成得到的音频写入固定路径

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Audio Storage Port - 出站端口
///
/// 每次保存都会覆盖上一次的输出
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 输出文件路径
    fn output_path(&self) -> &Path;

    /// 保存音频数据，返回写入的路径
    async fn save_audio(&self, data: &[u8]) -> Result<PathBuf, AudioStorageError>;

    /// 读取已保存的音频
    async fn read_audio(&self) -> Result<Vec<u8>, AudioStorageError>;

    /// 检查输出文件是否存在
    async fn audio_exists(&self) -> bool;
}
