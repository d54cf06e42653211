//! File Storage - 固定路径音频文件存储
//!
//! 实现 AudioStoragePort trait

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{AudioStorageError, AudioStoragePort};

/// 解析输出路径：相对路径以可执行文件所在目录为基准
pub fn resolve_output_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        return path.to_path_buf();
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .map(|dir| dir.join(path))
        .unwrap_or_else(|| path.to_path_buf())
}

/// 文件系统音频存储，每次保存覆盖同一个文件
pub struct FileAudioStorage {
    output_path: PathBuf,
}

impl FileAudioStorage {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    fn output_path(&self) -> &Path {
        &self.output_path
    }

    async fn save_audio(&self, data: &[u8]) -> Result<PathBuf, AudioStorageError> {
        if let Some(parent) = self.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AudioStorageError::IoError(e.to_string()))?;
        }

        // 文件句柄在作用域结束时关闭，出错路径同样如此
        let mut file = fs::File::create(&self.output_path)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;
        file.write_all(data)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        tracing::debug!(
            path = %self.output_path.display(),
            size = data.len(),
            "Saved audio"
        );

        Ok(self.output_path.clone())
    }

    async fn read_audio(&self) -> Result<Vec<u8>, AudioStorageError> {
        if !self.output_path.exists() {
            return Err(AudioStorageError::FileNotFound(
                self.output_path.to_string_lossy().to_string(),
            ));
        }

        fs::read(&self.output_path)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))
    }

    async fn audio_exists(&self) -> bool {
        fs::metadata(&self.output_path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }
}
