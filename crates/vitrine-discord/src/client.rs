//! Discord REST client
//!
//! Implements the core fetch traits over the Discord HTTP API using a bot
//! token. Not-found responses become defined negative results; every other
//! non-2xx response is surfaced with its status and body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use vitrine_common::DiscordConfig;
use vitrine_core::{
    ChannelInfo, FetchError, FetchResult, MemberDirectory, MessageSource, SourceMember,
    SourceMessage, UpstreamProbe,
};

use crate::{mappers, wire};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct DiscordClient {
    http: reqwest::Client,
    api_base: String,
    bot_token: String,
}

impl DiscordClient {
    /// Build a client from the Discord section of the configuration.
    ///
    /// # Errors
    /// Returns a transport error if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &DiscordConfig) -> FetchResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::transport)?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            bot_token: config.bot_token.clone(),
        })
    }

    /// Issue a GET and decode the JSON body.
    ///
    /// `Ok(None)` on 404, `Err(Upstream)` on any other non-2xx status with
    /// the response body preserved for diagnostics.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> FetchResult<Option<T>> {
        let url = format!("{}{}", self.api_base, path);
        debug!(%url, "discord request");

        let response = self
            .http
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bot {}", self.bot_token))
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(FetchError::transport)
    }
}

#[async_trait]
impl UpstreamProbe for DiscordClient {
    /// Readiness probe: verify the bot token by fetching its own user.
    async fn ping(&self) -> FetchResult<()> {
        match self.get_json::<wire::User>("/users/@me").await? {
            Some(_) => Ok(()),
            None => Err(FetchError::Upstream {
                status: 404,
                body: "bot user not found".to_string(),
            }),
        }
    }
}

#[async_trait]
impl MessageSource for DiscordClient {
    async fn guild_channels(&self, guild_id: &str) -> FetchResult<Vec<ChannelInfo>> {
        let channels = self
            .get_json::<Vec<wire::Channel>>(&format!("/guilds/{guild_id}/channels"))
            .await?
            .unwrap_or_default();

        Ok(channels.into_iter().map(mappers::channel_info).collect())
    }

    async fn channel_messages(
        &self,
        channel_id: &str,
        limit: u8,
    ) -> FetchResult<Vec<SourceMessage>> {
        let messages = self
            .get_json::<Vec<wire::Message>>(&format!(
                "/channels/{channel_id}/messages?limit={limit}"
            ))
            .await?
            .unwrap_or_default();

        Ok(messages.into_iter().map(mappers::source_message).collect())
    }
}

#[async_trait]
impl MemberDirectory for DiscordClient {
    async fn guild_members(&self, guild_id: &str, limit: u16) -> FetchResult<Vec<SourceMember>> {
        let members = self
            .get_json::<Vec<wire::Member>>(&format!("/guilds/{guild_id}/members?limit={limit}"))
            .await?
            .unwrap_or_default();

        Ok(members.into_iter().map(mappers::source_member).collect())
    }

    async fn guild_member(
        &self,
        guild_id: &str,
        user_id: &str,
    ) -> FetchResult<Option<SourceMember>> {
        let member = self
            .get_json::<wire::Member>(&format!("/guilds/{guild_id}/members/{user_id}"))
            .await?;

        Ok(member.map(mappers::source_member))
    }
}
