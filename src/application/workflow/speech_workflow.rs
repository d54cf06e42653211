//! Speech Workflow - 文本 → 合成 → 落盘 → 播放
//!
//! 每一步失败立即返回，不重试，不回滚已写入的文件。

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioPlayerPort, AudioStoragePort, SpeechSynthesizerPort, SynthesisRequest,
};
use crate::domain::speech::{DialogText, OutputFormat, SessionState, SpeechSession, VoiceId};

/// 固定的合成参数
#[derive(Debug, Clone, Default)]
pub struct SpeechSettings {
    pub voice_id: VoiceId,
    pub output_format: OutputFormat,
}

/// 分步语音合成工作流
pub struct SpeechWorkflow {
    session: SpeechSession,
    settings: SpeechSettings,
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
    storage: Arc<dyn AudioStoragePort>,
    player: Arc<dyn AudioPlayerPort>,
}

impl SpeechWorkflow {
    pub fn new(
        settings: SpeechSettings,
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        storage: Arc<dyn AudioStoragePort>,
        player: Arc<dyn AudioPlayerPort>,
    ) -> Self {
        Self {
            session: SpeechSession::new(),
            settings,
            synthesizer,
            storage,
            player,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), ApplicationError> {
        let text = DialogText::new(text)?;
        self.session.set_text(text)?;
        Ok(())
    }

    /// 原始字节输入，非 UTF-8 视为类型不符
    pub fn set_text_bytes(&mut self, bytes: Vec<u8>) -> Result<(), ApplicationError> {
        let text = DialogText::from_bytes(bytes)?;
        self.session.set_text(text)?;
        Ok(())
    }

    pub async fn synthesize(&mut self) -> Result<(), ApplicationError> {
        let text = self.session.pending_text()?;
        let request = SynthesisRequest {
            text: text.as_str().to_string(),
            output_format: self.settings.output_format,
            voice_id: self.settings.voice_id.clone(),
        };

        tracing::info!(
            session_id = %self.session.id(),
            engine = self.synthesizer.name(),
            voice_id = %request.voice_id,
            output_format = %request.output_format,
            chars = text.char_count(),
            "Creating speech from text"
        );

        let response = self.synthesizer.synthesize(request).await.map_err(|e| {
            tracing::error!(session_id = %self.session.id(), error = %e, "Speech synthesis failed");
            ApplicationError::from(e)
        })?;

        let audio = response
            .audio_stream
            .filter(|audio| !audio.is_empty())
            .ok_or_else(|| ApplicationError::protocol("no audio in response"))?;

        tracing::debug!(
            session_id = %self.session.id(),
            audio_size = audio.len(),
            content_type = ?response.content_type,
            request_characters = ?response.request_characters,
            "Audio stream received"
        );

        self.session.record_audio(audio)?;
        Ok(())
    }

    pub async fn persist(&mut self) -> Result<PathBuf, ApplicationError> {
        let audio = self.session.pending_audio()?;
        let path = self.storage.save_audio(audio).await.map_err(|e| {
            tracing::error!(session_id = %self.session.id(), error = %e, "Failed to write audio");
            ApplicationError::from(e)
        })?;

        self.session.mark_persisted(path.clone())?;
        Ok(path)
    }

    pub fn play(&mut self) -> Result<(), ApplicationError> {
        let path = self.session.playable_path()?;
        self.player.play(path)?;

        tracing::info!(session_id = %self.session.id(), path = %path.display(), "Playback launched");
        self.session.mark_played()?;
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn session(&self) -> &SpeechSession {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{FakeSpeechSynthesizer, FileAudioStorage, NoopAudioPlayer};
    use tempfile::tempdir;

    fn workflow(
        synthesizer: FakeSpeechSynthesizer,
        storage: Arc<FileAudioStorage>,
        player: Arc<NoopAudioPlayer>,
    ) -> SpeechWorkflow {
        SpeechWorkflow::new(
            SpeechSettings::default(),
            Arc::new(synthesizer),
            storage,
            player,
        )
    }

    #[tokio::test]
    async fn test_end_to_end_writes_audio_file() {
        let temp_dir = tempdir().unwrap();
        let storage = Arc::new(FileAudioStorage::new(temp_dir.path().join("output.mp3")));
        let player = Arc::new(NoopAudioPlayer::new());
        let mut flow = workflow(
            FakeSpeechSynthesizer::with_audio(b"ID3 fake mp3".to_vec()),
            storage.clone(),
            player.clone(),
        );

        flow.set_text("Hello").unwrap();
        flow.synthesize().await.unwrap();
        let path = flow.persist().await.unwrap();

        assert_eq!(path, temp_dir.path().join("output.mp3"));
        let written = std::fs::read(&path).unwrap();
        assert!(!written.is_empty());
        assert_eq!(flow.state(), SessionState::Persisted);

        flow.play().unwrap();
        assert_eq!(flow.state(), SessionState::Played);
        assert_eq!(player.played(), vec![path]);
    }

    #[tokio::test]
    async fn test_persist_before_synthesize_is_precondition_violation() {
        let temp_dir = tempdir().unwrap();
        let storage = Arc::new(FileAudioStorage::new(temp_dir.path().join("output.mp3")));
        let mut flow = workflow(
            FakeSpeechSynthesizer::with_audio(vec![1]),
            storage.clone(),
            Arc::new(NoopAudioPlayer::new()),
        );

        flow.set_text("Hello").unwrap();
        let err = flow.persist().await.unwrap_err();
        assert!(matches!(err, ApplicationError::PreconditionViolated(_)));
        assert!(!storage.audio_exists().await);
    }

    #[tokio::test]
    async fn test_synthesize_without_text_is_precondition_violation() {
        let temp_dir = tempdir().unwrap();
        let mut flow = workflow(
            FakeSpeechSynthesizer::with_audio(vec![1]),
            Arc::new(FileAudioStorage::new(temp_dir.path().join("output.mp3"))),
            Arc::new(NoopAudioPlayer::new()),
        );

        let err = flow.synthesize().await.unwrap_err();
        assert!(matches!(err, ApplicationError::PreconditionViolated(_)));
    }

    #[tokio::test]
    async fn test_service_failure_leaves_no_file() {
        let temp_dir = tempdir().unwrap();
        let storage = Arc::new(FileAudioStorage::new(temp_dir.path().join("output.mp3")));
        let mut flow = workflow(
            FakeSpeechSynthesizer::failing("ThrottlingException"),
            storage.clone(),
            Arc::new(NoopAudioPlayer::new()),
        );

        flow.set_text("Hello").unwrap();
        let err = flow.synthesize().await.unwrap_err();
        assert!(matches!(err, ApplicationError::ServiceError(_)));
        assert_eq!(flow.state(), SessionState::TextSet);

        let err = flow.persist().await.unwrap_err();
        assert!(matches!(err, ApplicationError::PreconditionViolated(_)));
        assert!(!storage.audio_exists().await);
    }

    #[tokio::test]
    async fn test_missing_audio_is_protocol_error() {
        let temp_dir = tempdir().unwrap();
        let mut flow = workflow(
            FakeSpeechSynthesizer::without_audio(),
            Arc::new(FileAudioStorage::new(temp_dir.path().join("output.mp3"))),
            Arc::new(NoopAudioPlayer::new()),
        );

        flow.set_text("Hello").unwrap();
        let err = flow.synthesize().await.unwrap_err();
        assert!(matches!(err, ApplicationError::ProtocolError(ref m) if m.contains("no audio")));
    }

    #[tokio::test]
    async fn test_write_failure_is_io_error() {
        let temp_dir = tempdir().unwrap();
        // 目标路径是一个已存在的目录，写入必然失败
        let mut flow = workflow(
            FakeSpeechSynthesizer::with_audio(vec![1, 2]),
            Arc::new(FileAudioStorage::new(temp_dir.path())),
            Arc::new(NoopAudioPlayer::new()),
        );

        flow.set_text("Hello").unwrap();
        flow.synthesize().await.unwrap();
        let err = flow.persist().await.unwrap_err();
        assert!(matches!(err, ApplicationError::IoError(_)));
        assert_eq!(flow.state(), SessionState::Synthesized);
    }

    #[test]
    fn test_non_utf8_text_is_type_mismatch() {
        let temp_dir = tempdir().unwrap();
        let mut flow = workflow(
            FakeSpeechSynthesizer::with_audio(vec![1]),
            Arc::new(FileAudioStorage::new(temp_dir.path().join("output.mp3"))),
            Arc::new(NoopAudioPlayer::new()),
        );

        let err = flow.set_text_bytes(vec![0xc3, 0x28]).unwrap_err();
        assert!(matches!(err, ApplicationError::TypeMismatch(_)));
        assert_eq!(flow.state(), SessionState::Idle);
    }

    #[test]
    fn test_play_before_persist_is_precondition_violation() {
        let temp_dir = tempdir().unwrap();
        let player = Arc::new(NoopAudioPlayer::new());
        let mut flow = workflow(
            FakeSpeechSynthesizer::with_audio(vec![1]),
            Arc::new(FileAudioStorage::new(temp_dir.path().join("output.mp3"))),
            player.clone(),
        );

        flow.set_text("Hello").unwrap();
        assert!(matches!(
            flow.play().unwrap_err(),
            ApplicationError::PreconditionViolated(_)
        ));
        assert!(player.played().is_empty());
    }
}
