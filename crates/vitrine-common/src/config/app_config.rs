//! Application configuration structs
//!
//! Loads configuration from environment variables and a `.env` file.

use serde::Deserialize;
use std::env;

use vitrine_core::RoleMap;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub discord: DiscordConfig,
    pub roles: RoleConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Discord upstream configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordConfig {
    pub bot_token: String,
    pub guild_id: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Category whose text channels feed the showcase when the request
    /// does not name one.
    pub showcase_category_id: Option<String>,
    #[serde(default = "default_message_fetch_limit")]
    pub message_fetch_limit: u8,
    #[serde(default = "default_member_fetch_limit")]
    pub member_fetch_limit: u16,
    /// Case-insensitive substring; embed footers containing it are branded
    /// boilerplate and get dropped from responses.
    #[serde(default = "default_footer_hide_pattern")]
    pub footer_hide_pattern: String,
}

/// Staff role ids, one per tier
#[derive(Debug, Clone, Deserialize)]
pub struct RoleConfig {
    pub owner: String,
    pub co_owner: String,
    pub moderator: String,
    pub seller: String,
}

impl RoleConfig {
    /// Build the explicit tier-to-role-id mapping used by the core.
    #[must_use]
    pub fn to_role_map(&self) -> RoleMap {
        RoleMap::new(&self.owner, &self.co_owner, &self.moderator, &self.seller)
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "vitrine".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_api_base() -> String {
    "https://discord.com/api/v10".to_string()
}

fn default_message_fetch_limit() -> u8 {
    100
}

fn default_member_fetch_limit() -> u16 {
    1000
}

fn default_footer_hide_pattern() -> String {
    "noemt".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            discord: DiscordConfig {
                bot_token: env::var("DISCORD_BOT_TOKEN")
                    .map_err(|_| ConfigError::MissingVar("DISCORD_BOT_TOKEN"))?,
                guild_id: env::var("DISCORD_GUILD_ID")
                    .map_err(|_| ConfigError::MissingVar("DISCORD_GUILD_ID"))?,
                api_base: env::var("DISCORD_API_BASE").unwrap_or_else(|_| default_api_base()),
                showcase_category_id: env::var("SHOWCASE_CATEGORY_ID").ok(),
                message_fetch_limit: env::var("MESSAGE_FETCH_LIMIT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_message_fetch_limit),
                member_fetch_limit: env::var("MEMBER_FETCH_LIMIT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_member_fetch_limit),
                footer_hide_pattern: env::var("FOOTER_HIDE_PATTERN")
                    .unwrap_or_else(|_| default_footer_hide_pattern()),
            },
            roles: RoleConfig {
                owner: env::var("ROLE_ID_OWNER")
                    .map_err(|_| ConfigError::MissingVar("ROLE_ID_OWNER"))?,
                co_owner: env::var("ROLE_ID_COOWNER")
                    .map_err(|_| ConfigError::MissingVar("ROLE_ID_COOWNER"))?,
                moderator: env::var("ROLE_ID_MODERATOR")
                    .map_err(|_| ConfigError::MissingVar("ROLE_ID_MODERATOR"))?,
                seller: env::var("ROLE_ID_SELLER")
                    .map_err(|_| ConfigError::MissingVar("ROLE_ID_SELLER"))?,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: env::var("RATE_LIMIT_REQUESTS_PER_SECOND")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_requests_per_second),
                burst: env::var("RATE_LIMIT_BURST")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
