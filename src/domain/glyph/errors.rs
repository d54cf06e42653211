//! Glyph Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlyphError {
    #[error("No numbers allowed in color name: {0:?}")]
    NonAlphabetic(String),

    #[error("颜色名称不能为空")]
    Empty,
}
