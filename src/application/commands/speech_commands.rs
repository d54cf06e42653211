//! Speech Commands

/// 朗读文本命令：合成、落盘，可选播放
#[derive(Debug, Clone)]
pub struct SpeakText {
    pub text: String,
    pub play: bool,
}

impl SpeakText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            play: true,
        }
    }

    pub fn without_playback(mut self) -> Self {
        self.play = false;
        self
    }
}
