//! Speech Context - Aggregate Root

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

use super::{DialogText, SessionId, SessionState, SpeechError};

/// 语音合成会话聚合根
///
/// 不变量:
/// - 状态只能按 Idle → TextSet → Synthesized → Persisted → Played 前进
/// - Synthesized 及之后一定持有音频数据
/// - Persisted 及之后一定持有输出路径
#[derive(Debug, Clone)]
pub struct SpeechSession {
    id: SessionId,
    state: SessionState,
    text: Option<DialogText>,
    audio: Option<Vec<u8>>,
    output_path: Option<PathBuf>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SpeechSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            state: SessionState::Idle,
            text: None,
            audio: None,
            output_path: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 设置文本；合成开始前可以覆盖
    pub fn set_text(&mut self, text: DialogText) -> Result<(), SpeechError> {
        self.require_any(&[SessionState::Idle, SessionState::TextSet], "set text")?;
        self.text = Some(text);
        self.advance(SessionState::TextSet);
        Ok(())
    }

    /// 取出待合成文本，要求状态为 TextSet
    pub fn pending_text(&self) -> Result<&DialogText, SpeechError> {
        self.require(SessionState::TextSet, "synthesize")?;
        self.text.as_ref().ok_or(SpeechError::InvalidTransition {
            state: self.state,
            action: "synthesize",
        })
    }

    pub fn record_audio(&mut self, audio: Vec<u8>) -> Result<(), SpeechError> {
        self.require(SessionState::TextSet, "synthesize")?;
        self.audio = Some(audio);
        self.advance(SessionState::Synthesized);
        Ok(())
    }

    /// 取出待写入的音频，要求状态为 Synthesized
    pub fn pending_audio(&self) -> Result<&[u8], SpeechError> {
        self.require(SessionState::Synthesized, "persist")?;
        self.audio.as_deref().ok_or(SpeechError::InvalidTransition {
            state: self.state,
            action: "persist",
        })
    }

    pub fn mark_persisted(&mut self, path: PathBuf) -> Result<(), SpeechError> {
        self.require(SessionState::Synthesized, "persist")?;
        self.output_path = Some(path);
        self.advance(SessionState::Persisted);
        Ok(())
    }

    /// 取出待播放的文件路径，要求状态为 Persisted
    pub fn playable_path(&self) -> Result<&Path, SpeechError> {
        self.require(SessionState::Persisted, "play")?;
        self.output_path.as_deref().ok_or(SpeechError::InvalidTransition {
            state: self.state,
            action: "play",
        })
    }

    pub fn mark_played(&mut self) -> Result<(), SpeechError> {
        self.require(SessionState::Persisted, "play")?;
        self.advance(SessionState::Played);
        Ok(())
    }

    fn require(&self, expected: SessionState, action: &'static str) -> Result<(), SpeechError> {
        self.require_any(&[expected], action)
    }

    fn require_any(
        &self,
        expected: &[SessionState],
        action: &'static str,
    ) -> Result<(), SpeechError> {
        if expected.contains(&self.state) {
            Ok(())
        } else {
            Err(SpeechError::InvalidTransition {
                state: self.state,
                action,
            })
        }
    }

    fn advance(&mut self, next: SessionState) {
        tracing::trace!(session_id = %self.id, from = %self.state, to = %next, "Session transition");
        self.state = next;
        self.updated_at = Utc::now();
    }

    // Getters
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn text(&self) -> Option<&DialogText> {
        self.text.as_ref()
    }

    pub fn audio(&self) -> Option<&[u8]> {
        self.audio.as_deref()
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Default for SpeechSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> DialogText {
        DialogText::new(s).unwrap()
    }

    #[test]
    fn test_full_linear_progression() {
        let mut session = SpeechSession::new();
        assert_eq!(session.state(), SessionState::Idle);

        session.set_text(text("Hello")).unwrap();
        assert_eq!(session.pending_text().unwrap().as_str(), "Hello");

        session.record_audio(vec![1, 2, 3]).unwrap();
        assert_eq!(session.pending_audio().unwrap(), &[1, 2, 3]);

        session.mark_persisted(PathBuf::from("/tmp/output.mp3")).unwrap();
        assert_eq!(
            session.playable_path().unwrap(),
            Path::new("/tmp/output.mp3")
        );

        session.mark_played().unwrap();
        assert_eq!(session.state(), SessionState::Played);
    }

    #[test]
    fn test_transitions_touch_updated_at() {
        let mut session = SpeechSession::new();
        assert_eq!(session.created_at(), session.updated_at());

        session.set_text(text("Hello")).unwrap();
        assert!(session.updated_at() >= session.created_at());
    }

    #[test]
    fn test_text_can_be_replaced_before_synthesis() {
        let mut session = SpeechSession::new();
        session.set_text(text("first")).unwrap();
        session.set_text(text("second")).unwrap();
        assert_eq!(session.text().unwrap().as_str(), "second");
    }

    #[test]
    fn test_synthesize_without_text_fails() {
        let session = SpeechSession::new();
        assert_eq!(
            session.pending_text().unwrap_err(),
            SpeechError::InvalidTransition {
                state: SessionState::Idle,
                action: "synthesize",
            }
        );
    }

    #[test]
    fn test_persist_before_synthesis_fails() {
        let mut session = SpeechSession::new();
        session.set_text(text("Hello")).unwrap();
        assert!(session.pending_audio().is_err());
        assert!(session.mark_persisted(PathBuf::from("x.mp3")).is_err());
        assert_eq!(session.state(), SessionState::TextSet);
    }

    #[test]
    fn test_no_going_back() {
        let mut session = SpeechSession::new();
        session.set_text(text("Hello")).unwrap();
        session.record_audio(vec![0]).unwrap();
        assert!(session.set_text(text("again")).is_err());
        assert!(session.record_audio(vec![1]).is_err());
        assert!(session.mark_played().is_err());
    }
}
