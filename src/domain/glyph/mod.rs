//! Glyph Context - 颜色名 → Emoji 查询
//!
//! 职责:
//! - 颜色 token 校验与规范化
//! - 基于 `emojis` 内置名称表的查找
//! - 文本中 `:alias:` 的替换

mod errors;
mod lookup;
mod value_objects;

pub use errors::GlyphError;
pub use lookup::{emojize, lookup_alias, lookup_color};
pub use value_objects::{ColorToken, Glyph, GlyphLookup};
