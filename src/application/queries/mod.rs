//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：不产生外部副作用的操作

mod glyph_queries;
mod sampler_queries;

pub mod handlers;

pub use glyph_queries::*;
pub use sampler_queries::*;
