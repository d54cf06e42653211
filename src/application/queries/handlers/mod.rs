//! Query Handlers

mod glyph_handlers;
mod sampler_handlers;

pub use glyph_handlers::{ColorGlyphResponse, EmojizeTextHandler, LookupColorGlyphHandler};
pub use sampler_handlers::{DrawRandomNumberHandler, RandomNumberResponse};
