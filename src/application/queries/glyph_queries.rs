//! Glyph Queries

/// 颜色 → Emoji 查询
#[derive(Debug, Clone)]
pub struct LookupColorGlyph {
    pub color: String,
}

/// 替换文本中 `:alias:` 的查询
#[derive(Debug, Clone)]
pub struct EmojizeText {
    pub text: String,
}
