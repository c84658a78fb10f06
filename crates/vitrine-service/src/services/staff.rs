//! Staff lookup service
//!
//! Answers "is this user staff, and at what tier" for a single user id.

use tracing::instrument;

use vitrine_core::{avatar_url, fallback_avatar_url};

use crate::dto::StaffStatus;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Staff lookup service
pub struct StaffService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StaffService<'a> {
    /// Create a new StaffService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Look up one user's staff status.
    ///
    /// A user outside the guild, or inside it without any staff role, is a
    /// defined negative result rather than an error.
    #[instrument(skip(self))]
    pub async fn member_status(&self, user_id: &str) -> ServiceResult<StaffStatus> {
        if user_id.trim().is_empty() {
            return Err(ServiceError::validation("user_id is required"));
        }

        let config = self.ctx.config();
        let member = self
            .ctx
            .member_directory()
            .guild_member(&config.discord.guild_id, user_id)
            .await?;

        let Some(member) = member else {
            return Ok(StaffStatus::negative());
        };

        let Some(tier) = self.ctx.role_map().highest_tier(&member.role_ids) else {
            return Ok(StaffStatus::negative());
        };

        let avatar = member
            .user
            .avatar_hash
            .as_deref()
            .map(|hash| avatar_url(&member.user.id, hash))
            .unwrap_or_else(|| fallback_avatar_url(&member.user.id));

        Ok(StaffStatus {
            is_staff: true,
            tier: Some(tier.key()),
            name: Some(member.display_name().to_string()),
            avatar: Some(avatar),
        })
    }
}
