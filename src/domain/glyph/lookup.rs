//! Glyph Context - 名称表查找

use super::{ColorToken, Glyph, GlyphLookup};

/// 按别名查找 emoji
///
/// 先匹配 gemoji shortcode（`red_circle`），再把下划线换成空格匹配 CLDR 名称
/// （`thumbs_up` → `thumbs up`）。两侧的冒号可有可无。
pub fn lookup_alias(alias: &str) -> GlyphLookup {
    let alias = alias.trim_matches(':');
    if alias.is_empty() {
        return GlyphLookup::NotFound;
    }

    if let Some(emoji) = emojis::get_by_shortcode(alias) {
        return GlyphLookup::Found(Glyph::from_emoji(emoji));
    }

    let name = alias.replace('_', " ");
    emojis::iter()
        .find(|emoji| emoji.name().eq_ignore_ascii_case(&name))
        .map(|emoji| GlyphLookup::Found(Glyph::from_emoji(emoji)))
        .unwrap_or(GlyphLookup::NotFound)
}

/// 查找颜色对应的圆形 emoji
pub fn lookup_color(color: &ColorToken) -> GlyphLookup {
    let lookup = lookup_alias(&color.alias());
    tracing::debug!(
        color = %color,
        alias = %color.alias(),
        found = lookup.is_found(),
        "Color glyph lookup"
    );
    lookup
}

/// 把文本中的 `:alias:` 替换为 emoji，未知别名原样保留
pub fn emojize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(':') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let replaced = after.find(':').and_then(|end| {
            let candidate = &after[..end];
            if !is_alias(candidate) {
                return None;
            }
            lookup_alias(candidate).glyph().map(|glyph| (glyph, end))
        });

        match replaced {
            Some((glyph, end)) => {
                out.push_str(glyph.as_str());
                rest = &after[end + 1..];
            }
            None => {
                out.push(':');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn is_alias(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+'))
}
