//! Sampler Context - Value Objects

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::SamplerError;

/// 闭区间 [lower, upper]
///
/// 不变量:
/// - lower <= upper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRange {
    lower: i64,
    upper: i64,
}

impl SampleRange {
    pub fn new(lower: i64, upper: i64) -> Result<Self, SamplerError> {
        if lower > upper {
            return Err(SamplerError::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> i64 {
        self.lower
    }

    pub fn upper(&self) -> i64 {
        self.upper
    }

    /// 从系统熵源重新播种后抽取一个均匀分布的整数
    pub fn sample(&self) -> i64 {
        let mut rng = StdRng::from_entropy();
        self.sample_with(&mut rng)
    }

    /// 使用调用方提供的随机源抽样
    pub fn sample_with<R: Rng>(&self, rng: &mut R) -> i64 {
        rng.gen_range(self.lower..=self.upper)
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

impl Default for SampleRange {
    fn default() -> Self {
        Self { lower: 0, upper: 100 }
    }
}

impl std::fmt::Display for SampleRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.lower, self.upper)
    }
}
