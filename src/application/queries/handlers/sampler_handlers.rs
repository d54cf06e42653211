//! Sampler Query Handlers

use crate::application::error::ApplicationError;
use crate::application::queries::DrawRandomNumber;
use crate::domain::sampler::SampleRange;

/// 随机数响应
#[derive(Debug, Clone, Copy)]
pub struct RandomNumberResponse {
    pub range: SampleRange,
    pub value: i64,
}

impl std::fmt::Display for RandomNumberResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Here's a random number from {}:  {}",
            self.range, self.value
        )
    }
}

/// DrawRandomNumber Handler
#[derive(Debug, Default)]
pub struct DrawRandomNumberHandler;

impl DrawRandomNumberHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: DrawRandomNumber) -> Result<RandomNumberResponse, ApplicationError> {
        let range = SampleRange::new(query.lower, query.upper)?;
        let value = range.sample();

        tracing::debug!(lower = range.lower(), upper = range.upper(), value, "Random number drawn");

        Ok(RandomNumberResponse { range, value })
    }
}
