//! Test fixtures: an in-memory Discord fake and data builders

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use vitrine_core::{
    ChannelInfo, FetchError, FetchResult, MemberDirectory, MessageSource, SourceEmbed,
    SourceMember, SourceMessage, SourceUser, UpstreamProbe,
};

/// In-memory stand-in for the Discord API.
///
/// Channels, messages, and members are seeded up front; individual channels
/// can be marked as failing, or the whole fake taken down.
#[derive(Debug, Default)]
pub struct FakeDiscord {
    pub channels: Vec<ChannelInfo>,
    pub messages: HashMap<String, Vec<SourceMessage>>,
    pub members: Vec<SourceMember>,
    pub failing_channels: HashSet<String>,
    pub down: bool,
}

impl FakeDiscord {
    fn outage() -> FetchError {
        FetchError::Upstream {
            status: 500,
            body: "upstream outage".to_string(),
        }
    }
}

#[async_trait]
impl MessageSource for FakeDiscord {
    async fn guild_channels(&self, _guild_id: &str) -> FetchResult<Vec<ChannelInfo>> {
        if self.down {
            return Err(Self::outage());
        }
        Ok(self.channels.clone())
    }

    async fn channel_messages(
        &self,
        channel_id: &str,
        _limit: u8,
    ) -> FetchResult<Vec<SourceMessage>> {
        if self.down || self.failing_channels.contains(channel_id) {
            return Err(Self::outage());
        }
        Ok(self.messages.get(channel_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl MemberDirectory for FakeDiscord {
    async fn guild_members(&self, _guild_id: &str, limit: u16) -> FetchResult<Vec<SourceMember>> {
        if self.down {
            return Err(Self::outage());
        }
        Ok(self.members.iter().take(limit as usize).cloned().collect())
    }

    async fn guild_member(
        &self,
        _guild_id: &str,
        user_id: &str,
    ) -> FetchResult<Option<SourceMember>> {
        if self.down {
            return Err(Self::outage());
        }
        Ok(self.members.iter().find(|m| m.user.id == user_id).cloned())
    }
}

#[async_trait]
impl UpstreamProbe for FakeDiscord {
    async fn ping(&self) -> FetchResult<()> {
        if self.down {
            Err(FetchError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Text channel under a category
pub fn text_channel(id: &str, parent: &str) -> ChannelInfo {
    ChannelInfo {
        id: id.to_string(),
        parent_id: Some(parent.to_string()),
        kind: 0,
    }
}

/// Voice channel under a category
pub fn voice_channel(id: &str, parent: &str) -> ChannelInfo {
    ChannelInfo {
        id: id.to_string(),
        parent_id: Some(parent.to_string()),
        kind: 2,
    }
}

pub fn user(id: &str, name: &str) -> SourceUser {
    SourceUser {
        id: id.to_string(),
        username: name.to_string(),
        global_name: None,
        avatar_hash: None,
    }
}

pub fn member(id: &str, name: &str, roles: &[&str]) -> SourceMember {
    SourceMember {
        user: user(id, name),
        nick: None,
        role_ids: roles.iter().map(|r| (*r).to_string()).collect(),
    }
}

/// Message carrying a single titled embed
pub fn embed_message(id: &str, title: &str, timestamp: &str) -> SourceMessage {
    SourceMessage {
        id: id.to_string(),
        author: user("1", "poster"),
        content: String::new(),
        mentions: vec![],
        embeds: vec![SourceEmbed {
            title: Some(title.to_string()),
            ..SourceEmbed::default()
        }],
        timestamp: Some(timestamp.parse().expect("fixture timestamp")),
    }
}

/// Plain text message with optional mentioned users
pub fn text_message(
    id: &str,
    author: SourceUser,
    content: &str,
    mentions: Vec<SourceUser>,
) -> SourceMessage {
    SourceMessage {
        id: id.to_string(),
        author,
        content: content.to_string(),
        mentions,
        embeds: vec![],
        timestamp: None,
    }
}
