//! Entity to DTO mapping
//!
//! All untrusted text crosses through the safe-rendering pipeline here;
//! no handler or service serializes raw chat content.

use vitrine_core::{
    group_fields, normalize_fields, render_safely, ChatMessage, Embed, ShortcodeTable,
};

use super::responses::{
    AuthorLineView, EmbedFieldView, EmbedView, FieldGroupView, FooterLineView, MessageView,
};

/// Render one embed for the showcase feed.
///
/// Footers whose text contains `footer_hide_pattern` (case-insensitive)
/// are branded boilerplate and dropped entirely.
pub fn embed_view(embed: Embed, table: &ShortcodeTable, footer_hide_pattern: &str) -> EmbedView {
    let accent_color = embed.accent_color_hex();

    let field_groups = group_fields(normalize_fields(&embed.fields, table))
        .into_iter()
        .map(|group| FieldGroupView {
            inline: group.inline,
            items: group
                .items
                .into_iter()
                .map(|field| EmbedFieldView {
                    name_html: field.name.as_deref().map(|s| render_safely(s, table)),
                    value_html: field.value.as_deref().map(|s| render_safely(s, table)),
                })
                .collect(),
        })
        .collect();

    let author = embed.author.map(|a| AuthorLineView {
        name_html: a.name.as_deref().map(|s| render_safely(s, table)),
        icon_url: a.icon_url,
    });

    let hide = footer_hide_pattern.to_lowercase();
    let footer = embed.footer.and_then(|f| {
        let hidden = f
            .text
            .as_deref()
            .is_some_and(|text| !hide.is_empty() && text.to_lowercase().contains(&hide));
        if hidden {
            None
        } else {
            Some(FooterLineView {
                text_html: f.text.as_deref().map(|s| render_safely(s, table)),
                icon_url: f.icon_url,
            })
        }
    });

    EmbedView {
        id: embed.id,
        channel_id: embed.channel_id,
        url: embed.url,
        accent_color,
        title_html: embed.title.as_deref().map(|s| render_safely(s, table)),
        description_html: embed.description.as_deref().map(|s| render_safely(s, table)),
        author,
        footer,
        thumbnail_url: embed.thumbnail_url,
        image_url: embed.image_url,
        field_groups,
        timestamp: embed.timestamp,
    }
}

/// Render one reputation feed message. The content is expected to already
/// have its mention tokens resolved.
pub fn message_view(message: ChatMessage, table: &ShortcodeTable) -> MessageView {
    MessageView {
        content_html: render_safely(&message.content, table),
        id: message.id,
        author_id: message.author_id,
        author_name: message.author_name,
        author_avatar: message.author_avatar,
        timestamp: message.timestamp,
    }
}
