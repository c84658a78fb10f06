//! Roster service
//!
//! Produces the staff roster bucketed by tier.

use tracing::{info, instrument};

use vitrine_core::bucket_members;

use crate::dto::RosterResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Roster service
pub struct RosterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RosterService<'a> {
    /// Create a new RosterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch the member list and bucket it into the staff roster.
    #[instrument(skip(self))]
    pub async fn staff_roster(&self) -> ServiceResult<RosterResponse> {
        let config = self.ctx.config();
        let members = self
            .ctx
            .member_directory()
            .guild_members(&config.discord.guild_id, config.discord.member_fetch_limit)
            .await?;

        let buckets = bucket_members(&members, self.ctx.role_map());
        info!(members = members.len(), staff = buckets.len(), "Roster assembled");

        Ok(RosterResponse::from(buckets))
    }
}
