//! Sampler Queries

/// 抽取随机数查询，闭区间
#[derive(Debug, Clone, Copy)]
pub struct DrawRandomNumber {
    pub lower: i64,
    pub upper: i64,
}

impl Default for DrawRandomNumber {
    fn default() -> Self {
        Self { lower: 0, upper: 100 }
    }
}
