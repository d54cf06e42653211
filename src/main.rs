//! Demokit - 三个演示流程
//!
//! - Flow A: 随机数
//! - Flow B: 颜色 Emoji（可选交互式查询）
//! - Flow C: 文本 → Polly → output.mp3 → 系统播放器

use std::sync::Arc;

use demokit::application::{
    ApplicationError, DrawRandomNumber, DrawRandomNumberHandler, EmojizeText, EmojizeTextHandler,
    LookupColorGlyph, LookupColorGlyphHandler, SpeakText, SpeakTextHandler, SpeechSettings,
};
use demokit::config::{load_config, print_config, AppConfig};
use demokit::domain::glyph::GlyphLookup;
use demokit::domain::speech::VoiceId;
use demokit::infrastructure::adapters::{
    resolve_output_path, FileAudioStorage, PollyClient, PollyClientConfig, SystemAudioPlayer,
};
use demokit::infrastructure::ColorPrompt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志，输出到 stderr，stdout 留给演示结果
    let log_filter = format!("{},demokit={}", config.log.level, config.log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    print_config(&config);

    random_number_demo(&config)?;
    emoji_demo(&config)?;
    polly_demo(&config).await?;

    tracing::info!("All demos complete");
    Ok(())
}

fn random_number_demo(config: &AppConfig) -> Result<(), ApplicationError> {
    let response = DrawRandomNumberHandler::new().handle(DrawRandomNumber {
        lower: config.sampler.lower,
        upper: config.sampler.upper,
    })?;
    println!("{}", response);
    Ok(())
}

fn emoji_demo(config: &AppConfig) -> anyhow::Result<()> {
    let greeting = EmojizeTextHandler::new().handle(EmojizeText {
        text: config.emoji.greeting.clone(),
    });
    println!("{}", greeting);

    let handler = LookupColorGlyphHandler::new();
    for color in &config.emoji.colors {
        let response = handler.handle(LookupColorGlyph {
            color: color.clone(),
        })?;
        println!("\nAttempting to display Emoji for code: {}", response.alias);
        match response.lookup {
            GlyphLookup::Found(glyph) => println!("{}", glyph),
            GlyphLookup::NotFound => println!("No emoji with this name exists"),
        }
    }

    if config.emoji.interactive {
        let summary = ColorPrompt::new(std::io::stdin().lock(), std::io::stdout()).run()?;
        tracing::info!(rounds = summary.rounds(), found = summary.found, "Interactive lookup done");
    }
    Ok(())
}

async fn polly_demo(config: &AppConfig) -> anyhow::Result<()> {
    println!("Creating Speech from text using Polly");

    let synthesizer = PollyClient::new(
        PollyClientConfig::new(&config.speech.endpoint).with_timeout(config.speech.timeout_secs),
    )?;
    let storage = FileAudioStorage::new(resolve_output_path(&config.speech.output_path));
    let settings = SpeechSettings {
        voice_id: VoiceId::new(&config.speech.voice_id).map_err(ApplicationError::from)?,
        output_format: config.speech.output_format,
    };

    let handler = SpeakTextHandler::new(
        settings,
        Arc::new(synthesizer),
        Arc::new(storage),
        Arc::new(SystemAudioPlayer::new()),
    );

    let mut command = SpeakText::new(config.speech.text.clone());
    if !config.speech.play {
        command = command.without_playback();
    }

    let response = handler.handle(command).await?;
    println!("Audio written to {}", response.output_path.display());
    Ok(())
}
