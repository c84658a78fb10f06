//! Markup escaper - the five HTML-significant characters

/// Escape `&`, `<`, `>`, `"` and `'` as named entities.
///
/// Ampersand goes first so entities introduced by the later replacements are
/// not double-escaped. Total over arbitrary input.
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
