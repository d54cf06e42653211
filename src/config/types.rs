//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::speech::OutputFormat;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 随机数采样配置
    #[serde(default)]
    pub sampler: SamplerConfig,

    /// Emoji 演示配置
    #[serde(default)]
    pub emoji: EmojiConfig,

    /// 语音合成配置
    #[serde(default)]
    pub speech: SpeechConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 随机数采样配置（闭区间）
#[derive(Debug, Clone, Deserialize)]
pub struct SamplerConfig {
    #[serde(default)]
    pub lower: i64,

    #[serde(default = "default_upper")]
    pub upper: i64,
}

fn default_upper() -> i64 {
    100
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            lower: 0,
            upper: default_upper(),
        }
    }
}

/// Emoji 演示配置
#[derive(Debug, Clone, Deserialize)]
pub struct EmojiConfig {
    /// 依次查询的颜色
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,

    /// 带 `:alias:` 的问候语
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// 是否在列表之后进入交互式颜色查询
    #[serde(default)]
    pub interactive: bool,
}

fn default_colors() -> Vec<String> {
    vec!["red".to_string(), "blue".to_string(), "cyan".to_string()]
}

fn default_greeting() -> String {
    "Rust is :thumbs_up:".to_string()
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            greeting: default_greeting(),
            interactive: false,
        }
    }
}

/// 语音合成配置
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// 合成服务基础 URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// 音色 ID
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    /// 输出格式
    #[serde(default)]
    pub output_format: OutputFormat,

    /// 输出文件；相对路径以可执行文件所在目录为基准
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// 要朗读的文本
    #[serde(default = "default_text")]
    pub text: String,

    /// 写入后是否打开播放
    #[serde(default = "default_play")]
    pub play: bool,
}

fn default_endpoint() -> String {
    "https://polly.us-east-1.amazonaws.com".to_string()
}

fn default_voice_id() -> String {
    "Joanna".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.mp3")
}

fn default_timeout() -> u64 {
    30
}

fn default_text() -> String {
    "Hello World.".to_string()
}

fn default_play() -> bool {
    true
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            voice_id: default_voice_id(),
            output_format: OutputFormat::Mp3,
            output_path: default_output_path(),
            timeout_secs: default_timeout(),
            text: default_text(),
            play: default_play(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.sampler.lower, 0);
        assert_eq!(config.sampler.upper, 100);
        assert_eq!(config.emoji.colors, vec!["red", "blue", "cyan"]);
        assert_eq!(config.speech.voice_id, "Joanna");
        assert_eq!(config.speech.output_format, OutputFormat::Mp3);
        assert_eq!(config.speech.output_path, PathBuf::from("output.mp3"));
        assert_eq!(config.log.level, "info");
    }
}
