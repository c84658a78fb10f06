//! Test helpers for integration tests
//!
//! Spawns the real Axum application against an in-memory Discord fake and
//! exposes a thin HTTP client for the tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use vitrine_api::{create_app, AppState};
use vitrine_common::{
    AppConfig, AppSettings, CorsConfig, DiscordConfig, Environment, RateLimitConfig, RoleConfig,
    ServerConfig,
};
use vitrine_service::ServiceContext;

use crate::fixtures::FakeDiscord;

/// Role ids used by the test configuration
pub const ROLE_OWNER: &str = "role-owner";
pub const ROLE_CO_OWNER: &str = "role-co-owner";
pub const ROLE_MODERATOR: &str = "role-moderator";
pub const ROLE_SELLER: &str = "role-seller";

/// Category id used by the test configuration
pub const CATEGORY: &str = "category-1";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a test server backed by the given fake
    pub async fn start(fake: FakeDiscord) -> Result<Self> {
        Self::start_with_config(fake, test_config()).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(fake: FakeDiscord, config: AppConfig) -> Result<Self> {
        let fake = Arc::new(fake);
        let service_context = ServiceContext::new(fake.clone(), fake.clone(), config.clone());
        let state = AppState::new(service_context, fake, config);
        let app = create_app(state);

        // Ephemeral port so parallel tests never collide
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }
}

/// Create a test configuration
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "vitrine-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        discord: DiscordConfig {
            bot_token: "test-token".to_string(),
            guild_id: "guild-1".to_string(),
            api_base: "http://127.0.0.1:1".to_string(),
            showcase_category_id: Some(CATEGORY.to_string()),
            message_fetch_limit: 100,
            member_fetch_limit: 1000,
            footer_hide_pattern: "noemt".to_string(),
        },
        roles: RoleConfig {
            owner: ROLE_OWNER.to_string(),
            co_owner: ROLE_CO_OWNER.to_string(),
            moderator: ROLE_MODERATOR.to_string(),
            seller: ROLE_SELLER.to_string(),
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: vec![],
        },
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
