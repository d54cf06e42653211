//! No-op Player - 只记录播放请求，不启动进程

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::application::ports::{AudioPlayerPort, PlayerError};

#[derive(Debug, Default)]
pub struct NoopAudioPlayer {
    played: Mutex<Vec<PathBuf>>,
}

impl NoopAudioPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已请求播放的文件
    pub fn played(&self) -> Vec<PathBuf> {
        self.played
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AudioPlayerPort for NoopAudioPlayer {
    fn play(&self, path: &Path) -> Result<(), PlayerError> {
        tracing::debug!(path = %path.display(), "NoopAudioPlayer: skipping playback");
        self.played
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_path_buf());
        Ok(())
    }
}
