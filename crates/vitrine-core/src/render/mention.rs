//! Mention resolver - raw user-reference tokens to display names

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Both raw mention forms: plain `<@123>` and nickname `<@!123>`.
static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<@!?(\d+)>").expect("mention regex is valid"));

/// Transient user-id to display-name mapping, built per message from that
/// message's resolved mention list.
pub type MentionMap = HashMap<String, String>;

/// Rewrite raw mention tokens as `@DisplayName`.
///
/// Tokens whose id is absent from the map are left byte-for-byte unchanged.
/// This operates on plain content; whatever consumes the result escapes it
/// afterwards, so a display name containing markup characters stays inert.
pub fn resolve_mentions(content: &str, mentions: &MentionMap) -> String {
    MENTION_RE
        .replace_all(content, |caps: &Captures<'_>| {
            mentions
                .get(&caps[1])
                .map_or_else(|| caps[0].to_string(), |name| format!("@{name}"))
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> MentionMap {
        entries
            .iter()
            .map(|(id, name)| ((*id).to_string(), (*name).to_string()))
            .collect()
    }

    #[test]
    fn test_plain_mention_resolves() {
        let mentions = map(&[("123", "Alice")]);
        assert_eq!(resolve_mentions("<@123> hi", &mentions), "@Alice hi");
    }

    #[test]
    fn test_nickname_mention_resolves() {
        let mentions = map(&[("123", "Alice")]);
        assert_eq!(resolve_mentions("yo <@!123>", &mentions), "yo @Alice");
    }

    #[test]
    fn test_unmapped_mention_left_unchanged() {
        assert_eq!(
            resolve_mentions("<@999> hi", &MentionMap::new()),
            "<@999> hi"
        );
    }

    #[test]
    fn test_multiple_mentions() {
        let mentions = map(&[("1", "A"), ("2", "B")]);
        assert_eq!(
            resolve_mentions("<@1> meets <@!2> and <@3>", &mentions),
            "@A meets @B and <@3>"
        );
    }

    #[test]
    fn test_non_numeric_token_untouched() {
        assert_eq!(
            resolve_mentions("<@abc> <@>", &map(&[("abc", "X")])),
            "<@abc> <@>"
        );
    }
}
