//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. String fields
//! ending in `html` carry markup produced by the safe-rendering pipeline
//! and are meant for direct insertion into a page.

use chrono::{DateTime, Utc};
use serde::Serialize;

use vitrine_core::RoleBuckets;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Showcase Responses
// ============================================================================

/// One rendered embed from the showcase feed, newest first
#[derive(Debug, Serialize)]
pub struct EmbedView {
    pub id: String,
    pub channel_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Accent color as a `#rrggbb` hex string
    pub accent_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorLineView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterLineView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub field_groups: Vec<FieldGroupView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Embed author line
#[derive(Debug, Serialize)]
pub struct AuthorLineView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Embed footer line
#[derive(Debug, Serialize)]
pub struct FooterLineView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// A run of adjacent fields sharing a layout
#[derive(Debug, Serialize)]
pub struct FieldGroupView {
    pub inline: bool,
    pub items: Vec<EmbedFieldView>,
}

/// One rendered embed field
#[derive(Debug, Serialize)]
pub struct EmbedFieldView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_html: Option<String>,
}

// ============================================================================
// Reputation Feed Responses
// ============================================================================

/// One rendered message from the reputation feed
#[derive(Debug, Serialize)]
pub struct MessageView {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar: String,
    pub content_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

// ============================================================================
// Roster / Staff Responses
// ============================================================================

/// Staff roster bucketed by tier
#[derive(Debug, Serialize)]
pub struct RosterResponse {
    #[serde(flatten)]
    pub buckets: RoleBuckets,
    pub total: usize,
}

impl From<RoleBuckets> for RosterResponse {
    fn from(buckets: RoleBuckets) -> Self {
        let total = buckets.len();
        Self { buckets, total }
    }
}

/// Result of a single-member staff lookup
#[derive(Debug, Serialize)]
pub struct StaffStatus {
    pub is_staff: bool,
    /// Tier key (`owner`, `co_owner`, ...) when the member holds a staff role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl StaffStatus {
    /// The defined negative result for users outside the guild or without
    /// a staff role.
    pub fn negative() -> Self {
        Self {
            is_staff: false,
            tier: None,
            name: None,
            avatar: None,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Readiness response including the upstream probe result
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub upstream: &'static str,
}
