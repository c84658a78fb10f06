//! Embed entity - a rich content block flattened from one (message, embed) pair

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::traits::SourceEmbed;

/// Accent color used when an embed carries none (Discord blurple).
pub const DEFAULT_ACCENT_COLOR: &str = "#5865f2";

/// A labeled name/value pair attached to an embed, optionally flagged for
/// side-by-side layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: Option<String>,
    pub value: Option<String>,
    pub inline: bool,
}

impl EmbedField {
    /// Create a new EmbedField
    pub fn new(name: Option<String>, value: Option<String>, inline: bool) -> Self {
        Self {
            name,
            value,
            inline,
        }
    }
}

/// Embed author line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedAuthor {
    pub name: Option<String>,
    pub icon_url: Option<String>,
}

/// Embed footer line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedFooter {
    pub text: Option<String>,
    pub icon_url: Option<String>,
}

/// Rich content block attached to a chat message.
///
/// One message may carry several embeds; each becomes its own `Embed` keyed
/// by the message id plus the source channel id. Field order is significant
/// and must be preserved - it drives [`crate::render::group_fields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub id: String,
    pub channel_id: String,
    pub url: Option<String>,
    pub color: Option<u32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<EmbedAuthor>,
    pub footer: Option<EmbedFooter>,
    pub thumbnail_url: Option<String>,
    pub image_url: Option<String>,
    pub fields: Vec<EmbedField>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Embed {
    /// Flatten one raw embed from a message into a standalone content block.
    ///
    /// The embed's own timestamp wins; the carrying message's timestamp is
    /// the fallback.
    pub fn from_source(
        message_id: &str,
        channel_id: &str,
        url: Option<String>,
        source: SourceEmbed,
        message_timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: message_id.to_string(),
            channel_id: channel_id.to_string(),
            url,
            color: source.color,
            title: source.title,
            description: source.description,
            author: source.author,
            footer: source.footer,
            thumbnail_url: source.thumbnail_url,
            image_url: source.image_url,
            fields: source.fields,
            timestamp: source.timestamp.or(message_timestamp),
        }
    }

    /// Accent color as a `#rrggbb` hex string, falling back to the default.
    pub fn accent_color_hex(&self) -> String {
        match self.color {
            Some(color) => format!("#{:06x}", color & 0x00FF_FFFF),
            None => DEFAULT_ACCENT_COLOR.to_string(),
        }
    }

    /// Sort key for recency ordering: missing timestamps sort as the epoch.
    pub fn sort_timestamp(&self) -> DateTime<Utc> {
        self.timestamp.unwrap_or(DateTime::UNIX_EPOCH)
    }
}

/// A run of adjacent fields rendered together. Derived by
/// [`crate::render::group_fields`], never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldGroup {
    pub inline: bool,
    pub items: Vec<EmbedField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_embed() -> SourceEmbed {
        SourceEmbed {
            url: None,
            color: Some(0x00FF_0000),
            title: Some("Title".to_string()),
            description: None,
            author: None,
            footer: None,
            thumbnail_url: None,
            image_url: None,
            fields: vec![],
            timestamp: None,
        }
    }

    #[test]
    fn test_accent_color_hex() {
        let embed = Embed::from_source("1", "100", None, source_embed(), None);
        assert_eq!(embed.accent_color_hex(), "#ff0000");
    }

    #[test]
    fn test_accent_color_default() {
        let mut source = source_embed();
        source.color = None;
        let embed = Embed::from_source("1", "100", None, source, None);
        assert_eq!(embed.accent_color_hex(), DEFAULT_ACCENT_COLOR);
    }

    #[test]
    fn test_accent_color_pads_to_six_digits() {
        let mut source = source_embed();
        source.color = Some(0x0F);
        let embed = Embed::from_source("1", "100", None, source, None);
        assert_eq!(embed.accent_color_hex(), "#00000f");
    }

    #[test]
    fn test_timestamp_falls_back_to_message() {
        let message_ts = "2024-06-01T12:00:00Z".parse().unwrap();
        let embed = Embed::from_source("1", "100", None, source_embed(), Some(message_ts));
        assert_eq!(embed.timestamp, Some(message_ts));
    }

    #[test]
    fn test_embed_timestamp_wins_over_message() {
        let embed_ts = "2024-06-02T00:00:00Z".parse().unwrap();
        let message_ts = "2024-06-01T12:00:00Z".parse().unwrap();
        let mut source = source_embed();
        source.timestamp = Some(embed_ts);
        let embed = Embed::from_source("1", "100", None, source, Some(message_ts));
        assert_eq!(embed.timestamp, Some(embed_ts));
    }

    #[test]
    fn test_missing_timestamp_sorts_as_epoch() {
        let embed = Embed::from_source("1", "100", None, source_embed(), None);
        assert_eq!(embed.sort_timestamp(), DateTime::UNIX_EPOCH);
    }
}
