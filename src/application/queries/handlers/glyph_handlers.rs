//! Glyph Query Handlers

use crate::application::error::ApplicationError;
use crate::application::queries::{EmojizeText, LookupColorGlyph};
use crate::domain::glyph::{emojize, lookup_color, ColorToken, GlyphLookup};

// ============================================================================
// Response DTOs
// ============================================================================

/// 颜色查询响应
#[derive(Debug, Clone)]
pub struct ColorGlyphResponse {
    pub color: ColorToken,
    pub alias: String,
    pub lookup: GlyphLookup,
}

// ============================================================================
// Handlers
// ============================================================================

/// LookupColorGlyph Handler
#[derive(Debug, Default)]
pub struct LookupColorGlyphHandler;

impl LookupColorGlyphHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: LookupColorGlyph) -> Result<ColorGlyphResponse, ApplicationError> {
        let color = ColorToken::new(&query.color)?;
        let lookup = lookup_color(&color);

        Ok(ColorGlyphResponse {
            alias: color.alias(),
            color,
            lookup,
        })
    }
}

/// EmojizeText Handler
#[derive(Debug, Default)]
pub struct EmojizeTextHandler;

impl EmojizeTextHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: EmojizeText) -> String {
        emojize(&query.text)
    }
}
