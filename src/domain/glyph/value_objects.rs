//! Glyph Context - Value Objects

use super::GlyphError;

/// 颜色 token
///
/// 不变量:
/// - 非空，且只包含字母
/// - 内部保存小写形式
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorToken(String);

impl ColorToken {
    pub fn new(token: impl AsRef<str>) -> Result<Self, GlyphError> {
        let token = token.as_ref();
        if token.is_empty() {
            return Err(GlyphError::Empty);
        }
        if !token.chars().all(char::is_alphabetic) {
            return Err(GlyphError::NonAlphabetic(token.to_string()));
        }
        Ok(Self(token.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 对应的 emoji 别名，例如 `red` → `:red_circle:`
    pub fn alias(&self) -> String {
        format!(":{}_circle:", self.0)
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 内置表中的一个 emoji
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    value: &'static str,
    name: &'static str,
}

impl Glyph {
    pub(super) fn from_emoji(emoji: &'static emojis::Emoji) -> Self {
        Self {
            value: emoji.as_str(),
            name: emoji.name(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.value
    }

    /// CLDR 名称，例如 `red circle`
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value)
    }
}

/// 查找结果：未命中不是错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphLookup {
    Found(Glyph),
    NotFound,
}

impl GlyphLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn glyph(&self) -> Option<Glyph> {
        match self {
            Self::Found(glyph) => Some(*glyph),
            Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_lowercased() {
        let token = ColorToken::new("ReD").unwrap();
        assert_eq!(token.as_str(), "red");
        assert_eq!(token.alias(), ":red_circle:");
    }

    #[test]
    fn test_token_with_digits_rejected() {
        assert_eq!(
            ColorToken::new("red1"),
            Err(GlyphError::NonAlphabetic("red1".to_string()))
        );
    }

    #[test]
    fn test_token_with_punctuation_rejected() {
        assert!(ColorToken::new("red_circle").is_err());
        assert!(ColorToken::new("blue ").is_err());
    }

    #[test]
    fn test_empty_token_rejected() {
        assert_eq!(ColorToken::new(""), Err(GlyphError::Empty));
    }
}
