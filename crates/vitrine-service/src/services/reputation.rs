//! Reputation feed service
//!
//! Fetches one channel's messages and renders them for display, with raw
//! mention tokens replaced by the mentioned user's display name.

use tracing::{info, instrument};

use vitrine_core::{
    avatar_url, fallback_avatar_url, resolve_mentions, ChatMessage, MentionMap, SourceMessage,
};

use crate::dto::{mappers, MessageView};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reputation feed service
pub struct ReputationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReputationService<'a> {
    /// Create a new ReputationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the rendered feed of one channel, newest first as fetched.
    /// Messages with no displayable content are dropped.
    #[instrument(skip(self))]
    pub async fn channel_feed(&self, channel_id: &str) -> ServiceResult<Vec<MessageView>> {
        if channel_id.trim().is_empty() {
            return Err(ServiceError::validation("channel is required"));
        }

        let config = self.ctx.config();
        let messages = self
            .ctx
            .message_source()
            .channel_messages(channel_id, config.discord.message_fetch_limit)
            .await?;

        let table = self.ctx.shortcodes();
        let views: Vec<MessageView> = messages
            .into_iter()
            .filter_map(resolve_message)
            .map(|message| mappers::message_view(message, table))
            .collect();

        info!(channel_id, messages = views.len(), "Reputation feed assembled");
        Ok(views)
    }
}

/// Resolve one raw message into a displayable chat message, or `None` when
/// nothing would be shown.
fn resolve_message(message: SourceMessage) -> Option<ChatMessage> {
    let mentions: MentionMap = message
        .mentions
        .iter()
        .map(|user| (user.id.clone(), user.display_name().to_string()))
        .collect();

    let author = &message.author;
    let avatar = author
        .avatar_hash
        .as_deref()
        .map(|hash| avatar_url(&author.id, hash))
        .unwrap_or_else(|| fallback_avatar_url(&author.id));

    let resolved = ChatMessage {
        id: message.id,
        author_id: author.id.clone(),
        author_name: author.display_name().to_string(),
        author_avatar: avatar,
        content: resolve_mentions(&message.content, &mentions),
        timestamp: message.timestamp,
    };

    if resolved.is_empty() {
        None
    } else {
        Some(resolved)
    }
}
