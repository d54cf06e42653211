//! System Player - 调用系统默认程序打开音频
//!
//! macOS 使用 `open`，其他平台使用 `xdg-open`。
//! 只报告进程启动失败，不等待播放结束。

use std::path::Path;
use std::process::{Command, Stdio};

use crate::application::ports::{AudioPlayerPort, PlayerError};

/// 按操作系统选择 opener
pub fn default_opener(os: &str) -> &'static str {
    if os == "macos" {
        "open"
    } else {
        "xdg-open"
    }
}

/// 系统默认播放器
#[derive(Debug, Clone)]
pub struct SystemAudioPlayer {
    opener: String,
}

impl SystemAudioPlayer {
    pub fn new() -> Self {
        Self {
            opener: default_opener(std::env::consts::OS).to_string(),
        }
    }

    /// 指定 opener 程序
    pub fn with_opener(opener: impl Into<String>) -> Self {
        Self {
            opener: opener.into(),
        }
    }
}

impl Default for SystemAudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioPlayerPort for SystemAudioPlayer {
    fn play(&self, path: &Path) -> Result<(), PlayerError> {
        if !path.is_file() {
            return Err(PlayerError::FileNotFound(path.to_string_lossy().to_string()));
        }

        let mut child = Command::new(&self.opener)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PlayerError::LaunchFailed {
                opener: self.opener.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            opener = %self.opener,
            pid = child.id(),
            path = %path.display(),
            "Opener launched"
        );

        // 后台回收子进程，调用方不等待
        std::thread::spawn(move || {
            let _ = child.wait();
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_opener_selection() {
        assert_eq!(default_opener("macos"), "open");
        assert_eq!(default_opener("linux"), "xdg-open");
        assert_eq!(default_opener("freebsd"), "xdg-open");
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let player = SystemAudioPlayer::with_opener("true");

        let err = player.play(&temp_dir.path().join("none.mp3")).unwrap_err();
        assert!(matches!(err, PlayerError::FileNotFound(_)));
    }

    #[test]
    fn test_unknown_opener_is_launch_failure() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("output.mp3");
        std::fs::write(&path, b"data").unwrap();

        let player = SystemAudioPlayer::with_opener("demokit-no-such-opener");
        let err = player.play(&path).unwrap_err();
        assert!(matches!(err, PlayerError::LaunchFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_does_not_wait() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("output.mp3");
        std::fs::write(&path, b"data").unwrap();

        let player = SystemAudioPlayer::with_opener("true");
        assert!(player.play(&path).is_ok());
    }
}
