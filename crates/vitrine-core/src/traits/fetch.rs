//! Fetch collaborator traits
//!
//! The aggregation and roster services depend on these traits instead of a
//! concrete HTTP client; `vitrine-discord` provides the real implementation
//! and tests inject in-memory fakes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{EmbedAuthor, EmbedField, EmbedFooter};

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Failure modes of the external fetch collaborator.
///
/// Not-found is deliberately absent: a missing member or empty channel is a
/// defined negative result (`Ok(None)` / empty list), never an error.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection-level failure (DNS, TLS, timeout, ...)
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx response from the upstream API, other than not-found
    #[error("upstream error ({status}): {body}")]
    Upstream { status: u16, body: String },
}

impl FetchError {
    /// Create a transport error from any displayable source
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Channel descriptor as listed under a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub id: String,
    pub parent_id: Option<String>,
    pub kind: u8,
}

impl ChannelInfo {
    /// Guild text channels are kind 0 on the wire.
    #[inline]
    pub fn is_guild_text(&self) -> bool {
        self.kind == 0
    }

    /// Check whether this channel sits under the given category.
    pub fn in_category(&self, category_id: &str) -> bool {
        self.parent_id.as_deref() == Some(category_id)
    }
}

/// User descriptor attached to messages and members.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceUser {
    pub id: String,
    pub username: String,
    pub global_name: Option<String>,
    pub avatar_hash: Option<String>,
}

impl SourceUser {
    /// Display name precedence: global name, then username, then id.
    pub fn display_name(&self) -> &str {
        if let Some(name) = self.global_name.as_deref() {
            return name;
        }
        if !self.username.is_empty() {
            return &self.username;
        }
        &self.id
    }
}

/// Raw embed payload as fetched, before flattening into an
/// [`crate::entities::Embed`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceEmbed {
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

/// Raw chat message as fetched from one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMessage {
    pub id: String,
    pub author: SourceUser,
    pub content: String,
    /// Users referenced by raw mention tokens in `content`, already resolved
    /// by the upstream API.
    pub mentions: Vec<SourceUser>,
    pub embeds: Vec<SourceEmbed>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Guild member: a user plus per-guild nickname and role set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMember {
    pub user: SourceUser,
    pub nick: Option<String>,
    pub role_ids: Vec<String>,
}

impl SourceMember {
    /// Display name precedence: nickname, then the user's own precedence.
    pub fn display_name(&self) -> &str {
        self.nick.as_deref().unwrap_or_else(|| self.user.display_name())
    }

    /// Check if the member holds a role
    #[inline]
    pub fn has_role(&self, role_id: &str) -> bool {
        self.role_ids.iter().any(|id| id == role_id)
    }
}

/// Source of channels and their messages (one guild).
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// List every channel in the guild.
    async fn guild_channels(&self, guild_id: &str) -> FetchResult<Vec<ChannelInfo>>;

    /// Fetch the most recent messages of one channel, newest first.
    async fn channel_messages(
        &self,
        channel_id: &str,
        limit: u8,
    ) -> FetchResult<Vec<SourceMessage>>;
}

/// Upstream reachability probe for readiness checks.
#[async_trait]
pub trait UpstreamProbe: Send + Sync {
    /// Verify the upstream API is reachable and accepts our credentials.
    async fn ping(&self) -> FetchResult<()>;
}

/// Source of guild membership information.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// List guild members up to `limit`.
    async fn guild_members(&self, guild_id: &str, limit: u16) -> FetchResult<Vec<SourceMember>>;

    /// Look up a single member; `Ok(None)` when the user is not in the guild.
    async fn guild_member(
        &self,
        guild_id: &str,
        user_id: &str,
    ) -> FetchResult<Option<SourceMember>>;
}
