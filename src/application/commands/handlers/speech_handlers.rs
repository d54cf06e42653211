//! Speech Command Handlers

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::commands::SpeakText;
use crate::application::error::ApplicationError;
use crate::application::ports::{AudioPlayerPort, AudioStoragePort, SpeechSynthesizerPort};
use crate::application::workflow::{SpeechSettings, SpeechWorkflow};
use crate::domain::speech::SessionId;

// ============================================================================
// SpeakText
// ============================================================================

/// 朗读文本响应
#[derive(Debug, Clone)]
pub struct SpeakTextResponse {
    pub session_id: SessionId,
    pub output_path: PathBuf,
    pub audio_size: usize,
    pub played: bool,
}

/// SpeakText Handler
pub struct SpeakTextHandler {
    settings: SpeechSettings,
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
    storage: Arc<dyn AudioStoragePort>,
    player: Arc<dyn AudioPlayerPort>,
}

impl SpeakTextHandler {
    pub fn new(
        settings: SpeechSettings,
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        storage: Arc<dyn AudioStoragePort>,
        player: Arc<dyn AudioPlayerPort>,
    ) -> Self {
        Self {
            settings,
            synthesizer,
            storage,
            player,
        }
    }

    pub async fn handle(&self, command: SpeakText) -> Result<SpeakTextResponse, ApplicationError> {
        let mut workflow = SpeechWorkflow::new(
            self.settings.clone(),
            self.synthesizer.clone(),
            self.storage.clone(),
            self.player.clone(),
        );

        workflow.set_text(command.text)?;
        workflow.synthesize().await?;
        let output_path = workflow.persist().await?;
        let audio_size = workflow.session().audio().map_or(0, <[u8]>::len);

        if command.play {
            workflow.play()?;
        }

        let session = workflow.session();
        let elapsed_ms = (session.updated_at() - session.created_at()).num_milliseconds();
        tracing::info!(
            session_id = %session.id(),
            path = %output_path.display(),
            audio_size,
            elapsed_ms,
            played = command.play,
            "Speech created"
        );

        Ok(SpeakTextResponse {
            session_id: *session.id(),
            output_path,
            audio_size,
            played: command.play,
        })
    }
}
