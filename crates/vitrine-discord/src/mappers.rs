//! Conversions from wire payloads to the core source types

use chrono::{DateTime, Utc};

use vitrine_core::{
    ChannelInfo, EmbedAuthor, EmbedField, EmbedFooter, SourceEmbed, SourceMember, SourceMessage,
    SourceUser,
};

use crate::wire;

/// Parse an RFC 3339 timestamp, treating anything unparseable as absent.
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

pub(crate) fn channel_info(channel: wire::Channel) -> ChannelInfo {
    ChannelInfo {
        id: channel.id,
        parent_id: channel.parent_id,
        kind: channel.kind,
    }
}

pub(crate) fn source_user(user: wire::User) -> SourceUser {
    SourceUser {
        id: user.id,
        username: user.username,
        global_name: user.global_name,
        avatar_hash: user.avatar,
    }
}

pub(crate) fn source_member(member: wire::Member) -> SourceMember {
    SourceMember {
        user: source_user(member.user),
        nick: member.nick,
        role_ids: member.roles,
    }
}

pub(crate) fn source_embed(embed: wire::Embed) -> SourceEmbed {
    SourceEmbed {
        url: embed.url,
        color: embed.color,
        title: embed.title,
        description: embed.description,
        author: embed.author.map(|a| EmbedAuthor {
            name: a.name,
            icon_url: a.icon_url,
        }),
        footer: embed.footer.map(|f| EmbedFooter {
            text: f.text,
            icon_url: f.icon_url,
        }),
        thumbnail_url: embed.thumbnail.map(|m| m.url),
        image_url: embed.image.map(|m| m.url),
        fields: embed
            .fields
            .into_iter()
            .map(|f| EmbedField::new(f.name, f.value, f.inline))
            .collect(),
        timestamp: parse_timestamp(embed.timestamp.as_deref()),
    }
}

pub(crate) fn source_message(message: wire::Message) -> SourceMessage {
    SourceMessage {
        timestamp: parse_timestamp(message.timestamp.as_deref()),
        id: message.id,
        author: source_user(message.author),
        content: message.content,
        mentions: message.mentions.into_iter().map(source_user).collect(),
        embeds: message.embeds.into_iter().map(source_embed).collect(),
    }
}
