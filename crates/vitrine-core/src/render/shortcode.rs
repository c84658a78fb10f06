//! Shortcode translator - maps `:identifier:` emoji codes to Unicode glyphs

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches any token of shortcode shape; whether it translates depends on
/// the table. Unknown codes are not malformed, just unmapped.
static SHORTCODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i):[a-z0-9_]+:").expect("shortcode regex is valid"));

/// Explicit lookup table from shortcode (colons included) to glyph.
///
/// Passed into every translation call instead of living in process-wide
/// state, so callers can extend or replace the mapping.
#[derive(Debug, Clone, Default)]
pub struct ShortcodeTable {
    map: HashMap<String, String>,
}

impl ShortcodeTable {
    /// Empty table; every shortcode passes through unchanged.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in mapping used by the showcase content.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        table.insert(":money_with_wings:", "\u{1f4b8}");
        table.insert(":credit_card:", "\u{1f4b3}");
        table.insert(":moneybag:", "\u{1f4b0}");
        table.insert(":diamond_shape_with_a_dot_inside:", "\u{1f4a0}");
        table
    }

    /// Add or replace a mapping.
    pub fn insert(&mut self, code: impl Into<String>, glyph: impl Into<String>) {
        self.map.insert(code.into(), glyph.into());
    }

    /// Look up the glyph for an exact shortcode token.
    pub fn glyph(&self, code: &str) -> Option<&str> {
        self.map.get(code).map(String::as_str)
    }
}

/// Replace every known `:identifier:` shortcode with its Unicode glyph.
///
/// Total over arbitrary input; tokens of shortcode shape that are absent
/// from the table pass through unchanged.
pub fn translate_shortcodes(text: &str, table: &ShortcodeTable) -> String {
    SHORTCODE_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            table
                .glyph(&caps[0])
                .map_or_else(|| caps[0].to_string(), ToString::to_string)
        })
        .into_owned()
}
