//! Speech Context - 语音合成会话
//!
//! 职责:
//! - 合成文本校验
//! - 会话状态机（Idle → TextSet → Synthesized → Persisted → Played）
//! - 合成参数（音色、输出格式）

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::SpeechSession;
pub use errors::SpeechError;
pub use value_objects::{DialogText, OutputFormat, SessionId, SessionState, VoiceId};
