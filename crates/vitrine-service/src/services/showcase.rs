//! Showcase service
//!
//! Aggregates embeds from every text channel under one category into a
//! single feed, newest first.

use futures::future::join_all;
use tracing::{info, instrument, warn};

use vitrine_core::{Embed, SourceMessage};

use crate::dto::{mappers, EmbedView};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Showcase service
pub struct ShowcaseService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ShowcaseService<'a> {
    /// Create a new ShowcaseService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the aggregated embed feed for a category.
    ///
    /// `category` overrides the configured default when given. Channel
    /// listing failures abort the request; a failure fetching any single
    /// channel only drops that channel from the result.
    #[instrument(skip(self))]
    pub async fn latest_embeds(&self, category: Option<&str>) -> ServiceResult<Vec<EmbedView>> {
        let config = self.ctx.config();
        let category_id = category
            .or(config.discord.showcase_category_id.as_deref())
            .ok_or_else(|| ServiceError::validation("category is required"))?;

        let source = self.ctx.message_source();
        let channels = source.guild_channels(&config.discord.guild_id).await?;

        let targets: Vec<String> = channels
            .into_iter()
            .filter(|c| c.is_guild_text() && c.in_category(category_id))
            .map(|c| c.id)
            .collect();

        let limit = config.discord.message_fetch_limit;
        let fetches = targets.iter().map(|id| source.channel_messages(id, limit));
        let results = join_all(fetches).await;

        let mut embeds: Vec<Embed> = Vec::new();
        for (channel_id, result) in targets.iter().zip(results) {
            match result {
                Ok(messages) => collect_embeds(&mut embeds, channel_id, messages),
                Err(err) => {
                    warn!(channel_id, error = %err, "Skipping channel after fetch failure");
                }
            }
        }

        // Stable sort: equal timestamps keep their channel-listing order
        embeds.sort_by(|a, b| b.sort_timestamp().cmp(&a.sort_timestamp()));

        info!(
            category_id,
            channels = targets.len(),
            embeds = embeds.len(),
            "Showcase feed assembled"
        );

        let table = self.ctx.shortcodes();
        let pattern = &config.discord.footer_hide_pattern;
        Ok(embeds
            .into_iter()
            .map(|embed| mappers::embed_view(embed, table, pattern))
            .collect())
    }
}

/// Flatten every (message, embed) pair of one channel into standalone
/// content blocks.
fn collect_embeds(out: &mut Vec<Embed>, channel_id: &str, messages: Vec<SourceMessage>) {
    for message in messages {
        let SourceMessage {
            id,
            embeds,
            timestamp,
            ..
        } = message;
        for source in embeds {
            let url = source.url.clone();
            out.push(Embed::from_source(&id, channel_id, url, source, timestamp));
        }
    }
}
