//! Sampler Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplerError {
    #[error("无效的采样区间: lower {lower} > upper {upper}")]
    InvalidBounds { lower: i64, upper: i64 },
}
