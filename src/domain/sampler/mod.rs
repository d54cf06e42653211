//! Sampler Context - 随机数采样
//!
//! 职责:
//! - 闭区间边界校验
//! - 每次采样从系统熵源重新播种

mod errors;
mod value_objects;

pub use errors::SamplerError;
pub use value_objects::SampleRange;
