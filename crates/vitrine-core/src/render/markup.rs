//! Safe-renderer - untrusted chat text to display markup
//!
//! Strictly ordered pipeline: shortcode translation, full escaping, then
//! re-introduction of exactly four trusted patterns matched against the
//! escaped forms of their delimiters, then line breaks.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::escape::escape_markup;
use super::shortcode::{translate_shortcodes, ShortcodeTable};

/// Static custom emoji reference, matched on the escaped string.
static STATIC_EMOJI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&lt;:(\w+):(\d+)&gt;").expect("static emoji regex is valid"));

/// Animated custom emoji reference.
static ANIMATED_EMOJI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&lt;a:(\w+):(\d+)&gt;").expect("animated emoji regex is valid"));

static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold regex is valid"));

static UNDERLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__(.+?)__").expect("underline regex is valid"));

/// Render untrusted chat text as markup safe for direct display.
///
/// The output never contains unescaped user-controlled `<`, `>`, `&`, `"`
/// or `'` outside the exact substitutions performed here. Empty input
/// renders to the empty string; callers treat that as "render nothing".
pub fn render_safely(raw: &str, table: &ShortcodeTable) -> String {
    let s = translate_shortcodes(raw, table);
    let s = escape_markup(&s);

    let s = STATIC_EMOJI_RE.replace_all(&s, |caps: &Captures<'_>| emoji_img(&caps[1], &caps[2], "png"));
    let s = ANIMATED_EMOJI_RE.replace_all(&s, |caps: &Captures<'_>| emoji_img(&caps[1], &caps[2], "gif"));

    let s = BOLD_RE.replace_all(&s, "<strong>${1}</strong>");
    let s = UNDERLINE_RE.replace_all(&s, "<u>${1}</u>");
    let s = apply_italics(&s);

    s.replace('\n', "<br/>")
}

/// Inline image tag for a custom emoji. Name and id come from `\w+`/`\d+`
/// captures, so they cannot carry markup.
fn emoji_img(name: &str, id: &str, ext: &str) -> String {
    format!(
        r#"<img src="https://cdn.discordapp.com/emojis/{id}.{ext}?size=24&quality=lossless" alt="{name}" />"#
    )
}

/// Single-asterisk italics with boundary rules.
///
/// The opening `*` must be preceded by start-of-string, whitespace, or `(`,
/// and its first inner character must not be whitespace or another
/// asterisk. The closing `*` (the next asterisk; inner text cannot span
/// one) must be followed by whitespace, closing punctuation, or
/// end-of-string. The trailing boundary is inspected without being
/// consumed, so `*a* *b*` italicizes both. An asterisk with no valid
/// partner is emitted verbatim.
fn apply_italics(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '*' {
            let preceded_ok = i == 0 || {
                let prev = chars[i - 1];
                prev.is_whitespace() || prev == '('
            };
            let opens = preceded_ok
                && chars
                    .get(i + 1)
                    .is_some_and(|&c| !c.is_whitespace() && c != '*');

            if opens {
                if let Some(offset) = chars[i + 1..].iter().position(|&c| c == '*') {
                    let close = i + 1 + offset;
                    let followed_ok = match chars.get(close + 1) {
                        None => true,
                        Some(&c) => {
                            c.is_whitespace() || matches!(c, ')' | '.' | ',' | '!' | '?')
                        }
                    };
                    if followed_ok {
                        out.push_str("<em>");
                        out.extend(&chars[i + 1..close]);
                        out.push_str("</em>");
                        i = close + 1;
                        continue;
                    }
                }
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(raw: &str) -> String {
        render_safely(raw, &ShortcodeTable::builtin())
    }

    #[test]
    fn test_script_tag_never_survives() {
        let out = render("<script>alert('x')</script>");
        assert!(!out.contains("<script>"));
        assert_eq!(
            out,
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_static_emoji() {
        assert_eq!(
            render("<:pepe:12345>"),
            r#"<img src="https://cdn.discordapp.com/emojis/12345.png?size=24&quality=lossless" alt="pepe" />"#
        );
    }

    #[test]
    fn test_animated_emoji() {
        assert_eq!(
            render("<a:party:678>"),
            r#"<img src="https://cdn.discordapp.com/emojis/678.gif?size=24&quality=lossless" alt="party" />"#
        );
    }

    #[test]
    fn test_bold_and_underline() {
        assert_eq!(render("**hey** __you__"), "<strong>hey</strong> <u>you</u>");
    }

    #[test]
    fn test_bold_is_not_nested_italics() {
        assert_eq!(render("**bold**"), "<strong>bold</strong>");
    }

    #[test]
    fn test_italic_basic() {
        assert_eq!(render("an *important* word"), "an <em>important</em> word");
    }

    #[test]
    fn test_italic_at_string_edges() {
        assert_eq!(render("*start*"), "<em>start</em>");
    }

    #[test]
    fn test_italic_inside_parens() {
        assert_eq!(render("(*aside*)"), "(<em>aside</em>)");
    }

    #[test]
    fn test_italic_not_inside_words() {
        assert_eq!(render("5*3 = 15"), "5*3 = 15");
    }

    #[test]
    fn test_adjacent_italic_runs_both_match() {
        assert_eq!(render("*a* *b*"), "<em>a</em> <em>b</em>");
    }

    #[test]
    fn test_unbalanced_asterisk_left_verbatim() {
        assert_eq!(render("*dangling"), "*dangling");
        assert_eq!(render("a * b"), "a * b");
    }

    #[test]
    fn test_newlines_become_breaks() {
        assert_eq!(render("one\ntwo"), "one<br/>two");
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_shortcodes_run_before_escaping() {
        assert_eq!(render("price :moneybag:"), "price \u{1f4b0}");
    }

    #[test]
    fn test_forged_emoji_delimiters_do_not_match() {
        // The trusted pattern matches the *escaped* delimiters; a literal
        // "&lt;" typed by the user arrives as "&amp;lt;" and stays inert.
        let out = render("&lt;:fake:1&gt;");
        assert_eq!(out, "&amp;lt;:fake:1&amp;gt;");
    }

    #[test]
    fn test_quotes_are_escaped() {
        let out = render(r#"a "quoted" 'word'"#);
        assert_eq!(out, "a &quot;quoted&quot; &#39;word&#39;");
    }
}
