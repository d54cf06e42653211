//! Player Adapter - 音频播放实现

mod noop_player;
mod system_player;

pub use noop_player::NoopAudioPlayer;
pub use system_player::{default_opener, SystemAudioPlayer};
