//! Demokit - 三个小演示流程
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Sampler Context: 闭区间随机数
//! - Glyph Context: 颜色名 → Emoji
//! - Speech Context: 语音合成会话状态机
//!
//! 应用层 (application/):
//! - Ports: SpeechSynthesizer, AudioStorage, AudioPlayer
//! - Commands: SpeakText
//! - Queries: DrawRandomNumber, LookupColorGlyph, EmojizeText
//! - Workflow: 分步语音合成
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: Polly Client, File Storage, System Player

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
