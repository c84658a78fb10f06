//! Service context - dependency container for services
//!
//! Holds the fetch collaborators and the configuration-derived lookup
//! tables every service needs.

use std::sync::Arc;

use vitrine_common::AppConfig;
use vitrine_core::{MemberDirectory, MessageSource, RoleMap, ShortcodeTable};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - The message source (channels and their messages)
/// - The member directory (guild membership)
/// - Application configuration
/// - The role map and shortcode table derived from configuration
#[derive(Clone)]
pub struct ServiceContext {
    message_source: Arc<dyn MessageSource>,
    member_directory: Arc<dyn MemberDirectory>,
    config: Arc<AppConfig>,
    role_map: RoleMap,
    shortcodes: Arc<ShortcodeTable>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        message_source: Arc<dyn MessageSource>,
        member_directory: Arc<dyn MemberDirectory>,
        config: AppConfig,
    ) -> Self {
        let role_map = config.roles.to_role_map();

        Self {
            message_source,
            member_directory,
            config: Arc::new(config),
            role_map,
            shortcodes: Arc::new(ShortcodeTable::builtin()),
        }
    }

    /// Get the message source
    pub fn message_source(&self) -> &dyn MessageSource {
        self.message_source.as_ref()
    }

    /// Get the member directory
    pub fn member_directory(&self) -> &dyn MemberDirectory {
        self.member_directory.as_ref()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the tier-to-role-id mapping
    pub fn role_map(&self) -> &RoleMap {
        &self.role_map
    }

    /// Get the shortcode translation table
    pub fn shortcodes(&self) -> &ShortcodeTable {
        &self.shortcodes
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("message_source", &"dyn MessageSource")
            .field("member_directory", &"dyn MemberDirectory")
            .field("guild_id", &self.config.discord.guild_id)
            .finish()
    }
}
