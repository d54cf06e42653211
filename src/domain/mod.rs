//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Sampler Context: 随机数采样
//! - Glyph Context: 颜色名 → Emoji 查询
//! - Speech Context: 语音合成会话

pub mod glyph;
pub mod sampler;
pub mod speech;
