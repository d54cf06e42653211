//! Speech Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SpeechError;

/// 会话唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 待合成文本
///
/// 不变量:
/// - 合法 UTF-8
/// - 非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogText(String);

impl DialogText {
    pub fn new(text: impl Into<String>) -> Result<Self, SpeechError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }
        Ok(Self(text))
    }

    /// 从原始字节构造（例如读取自文件或管道）
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, SpeechError> {
        let text = String::from_utf8(bytes).map_err(|e| SpeechError::NotText(e.to_string()))?;
        Self::new(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for DialogText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 合成服务的音色标识，例如 `Joanna`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceId(String);

impl VoiceId {
    pub fn new(id: impl Into<String>) -> Result<Self, SpeechError> {
        let id = id.into();
        if id.is_empty() || !id.chars().all(char::is_alphanumeric) {
            return Err(SpeechError::InvalidVoice(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VoiceId {
    fn default() -> Self {
        Self("Joanna".to_string())
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 合成输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Mp3,
    OggVorbis,
    Pcm,
}

impl OutputFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::OggVorbis => "audio/ogg",
            Self::Pcm => "audio/pcm",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mp3 => write!(f, "mp3"),
            Self::OggVorbis => write!(f, "ogg_vorbis"),
            Self::Pcm => write!(f, "pcm"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = SpeechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mp3" => Ok(Self::Mp3),
            "ogg_vorbis" => Ok(Self::OggVorbis),
            "pcm" => Ok(Self::Pcm),
            _ => Err(SpeechError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// 会话状态，严格线性推进
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SessionState {
    Idle,
    TextSet,
    Synthesized,
    Persisted,
    Played,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::TextSet => "text_set",
            Self::Synthesized => "synthesized",
            Self::Persisted => "persisted",
            Self::Played => "played",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_text_rejects_blank() {
        assert_eq!(DialogText::new("   "), Err(SpeechError::EmptyText));
    }

    #[test]
    fn test_dialog_text_from_invalid_utf8() {
        let err = DialogText::from_bytes(vec![0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, SpeechError::NotText(_)));
    }

    #[test]
    fn test_voice_id_validation() {
        assert_eq!(VoiceId::default().as_str(), "Joanna");
        assert!(VoiceId::new("Matthew").is_ok());
        assert!(VoiceId::new("").is_err());
        assert!(VoiceId::new("Jo anna").is_err());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("MP3".parse::<OutputFormat>().unwrap(), OutputFormat::Mp3);
        assert_eq!(OutputFormat::OggVorbis.to_string(), "ogg_vorbis");
        assert!("wav".parse::<OutputFormat>().is_err());
    }
}
