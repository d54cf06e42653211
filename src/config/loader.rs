//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（demokit.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["demokit", "demokit.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `DEMOKIT_`，层级分隔符 `__`）
/// 2. 配置文件（demokit.toml 或 demokit.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `DEMOKIT_SAMPLER__UPPER=6`
/// - `DEMOKIT_SPEECH__ENDPOINT=http://localhost:4566`
/// - `DEMOKIT_SPEECH__VOICE_ID=Matthew`
/// - `DEMOKIT_SPEECH__PLAY=false`
/// - `DEMOKIT_EMOJI__INTERACTIVE=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    // 默认值由 types.rs 中的 serde default 提供
    let mut builder = Config::builder();

    // 1. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 2. 环境变量（最高优先级）
    // 例如: DEMOKIT_SPEECH__ENDPOINT=http://localhost:4566
    builder = builder.add_source(
        Environment::with_prefix("DEMOKIT")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("emoji.colors")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.sampler.lower > config.sampler.upper {
        return Err(ConfigError::ValidationError(format!(
            "Sampler lower bound {} exceeds upper bound {}",
            config.sampler.lower, config.sampler.upper
        )));
    }

    if config.speech.endpoint.is_empty() {
        return Err(ConfigError::ValidationError(
            "Speech endpoint cannot be empty".to_string(),
        ));
    }

    if config.speech.voice_id.is_empty() {
        return Err(ConfigError::ValidationError(
            "Voice ID cannot be empty".to_string(),
        ));
    }

    if config.speech.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Speech timeout cannot be 0".to_string(),
        ));
    }

    if config.speech.output_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Output path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Sampler Range: {}..={}", config.sampler.lower, config.sampler.upper);
    tracing::info!("Emoji Colors: {:?}", config.emoji.colors);
    tracing::info!("Emoji Interactive: {}", config.emoji.interactive);
    tracing::info!("Speech Endpoint: {}", config.speech.endpoint);
    tracing::info!("Speech Voice: {}", config.speech.voice_id);
    tracing::info!("Speech Format: {}", config.speech.output_format);
    tracing::info!("Speech Timeout: {}s", config.speech.timeout_secs);
    tracing::info!("Output Path: {:?}", config.speech.output_path);
    tracing::info!("Playback: {}", config.speech.play);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_inverted_sampler_range() {
        let mut config = AppConfig::default();
        config.sampler.lower = 10;
        config.sampler.upper = 1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_endpoint() {
        let mut config = AppConfig::default();
        config.speech.endpoint = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_timeout() {
        let mut config = AppConfig::default();
        config.speech.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[sampler]
lower = 1
upper = 6

[emoji]
colors = ["green"]

[speech]
voice_id = "Matthew"
output_format = "ogg_vorbis"
play = false
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.sampler.lower, 1);
        assert_eq!(config.sampler.upper, 6);
        assert_eq!(config.emoji.colors, vec!["green"]);
        assert_eq!(config.emoji.greeting, "Rust is :thumbs_up:");
        assert_eq!(config.speech.voice_id, "Matthew");
        assert_eq!(
            config.speech.output_format,
            crate::domain::speech::OutputFormat::OggVorbis
        );
        assert!(!config.speech.play);
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        let defaults = AppConfig::default();
        assert_eq!(config.sampler.lower, defaults.sampler.lower);
        assert_eq!(config.sampler.upper, defaults.sampler.upper);
        assert_eq!(config.emoji.colors, defaults.emoji.colors);
        assert_eq!(config.speech.endpoint, defaults.speech.endpoint);
        assert_eq!(config.speech.output_path, defaults.speech.output_path);
        assert_eq!(config.speech.timeout_secs, defaults.speech.timeout_secs);
        assert!(!config.emoji.interactive);
        assert_eq!(config.log.level, defaults.log.level);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[sampler]\nlower = 9\nupper = 2").unwrap();

        let err = load_config_from_path(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
