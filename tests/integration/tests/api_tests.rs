//! API integration tests
//!
//! End-to-end tests running the real Axum application against an
//! in-memory Discord fake.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::collections::HashSet;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

use integration_tests::{
    assert_json, assert_status, embed_message, member, text_channel, text_message, user,
    voice_channel, FakeDiscord, TestServer, CATEGORY, ROLE_MODERATOR, ROLE_OWNER, ROLE_SELLER,
};

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn health_check_returns_ok() -> Result<()> {
    let server = TestServer::start(FakeDiscord::default()).await?;

    let body: Value = assert_json(server.get("/health").await?, StatusCode::OK).await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn readiness_reflects_upstream_health() -> Result<()> {
    let server = TestServer::start(FakeDiscord::default()).await?;
    let body: Value = assert_json(server.get("/health/ready").await?, StatusCode::OK).await?;
    assert_eq!(body["upstream"], "ok");

    let down = FakeDiscord {
        down: true,
        ..FakeDiscord::default()
    };
    let server = TestServer::start(down).await?;
    let body: Value = assert_json(
        server.get("/health/ready").await?,
        StatusCode::SERVICE_UNAVAILABLE,
    )
    .await?;
    assert_eq!(body["status"], "not_ready");
    Ok(())
}

// ============================================================================
// Showcase
// ============================================================================

fn showcase_fake() -> FakeDiscord {
    let mut fake = FakeDiscord {
        channels: vec![
            text_channel("chan-a", CATEGORY),
            text_channel("chan-b", CATEGORY),
            text_channel("chan-c", "other-category"),
            voice_channel("chan-v", CATEGORY),
        ],
        ..FakeDiscord::default()
    };
    fake.messages.insert(
        "chan-a".to_string(),
        vec![embed_message("m1", "First", "2024-06-01T10:00:00Z")],
    );
    fake.messages.insert(
        "chan-b".to_string(),
        vec![embed_message("m2", "**Second**", "2024-06-02T10:00:00Z")],
    );
    fake.messages.insert(
        "chan-c".to_string(),
        vec![embed_message("m3", "Outside", "2024-06-03T10:00:00Z")],
    );
    fake
}

#[tokio::test]
async fn showcase_aggregates_category_channels_newest_first() -> Result<()> {
    let server = TestServer::start(showcase_fake()).await?;

    let body: Value = assert_json(server.get("/api/v1/showcase").await?, StatusCode::OK).await?;
    let data = body["data"].as_array().expect("data array");

    // Only the two text channels under the category contribute
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], "m2");
    assert_eq!(data[0]["title_html"], "<strong>Second</strong>");
    assert_eq!(data[1]["id"], "m1");
    assert_eq!(data[1]["channel_id"], "chan-a");
    assert_eq!(data[1]["accent_color"], "#5865f2");
    Ok(())
}

#[tokio::test]
async fn showcase_category_query_overrides_default() -> Result<()> {
    let server = TestServer::start(showcase_fake()).await?;

    let body: Value = assert_json(
        server.get("/api/v1/showcase?category=other-category").await?,
        StatusCode::OK,
    )
    .await?;
    let data = body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "m3");
    Ok(())
}

#[tokio::test]
async fn showcase_skips_failing_channel() -> Result<()> {
    let mut fake = showcase_fake();
    fake.failing_channels = HashSet::from(["chan-b".to_string()]);
    let server = TestServer::start(fake).await?;

    let body: Value = assert_json(server.get("/api/v1/showcase").await?, StatusCode::OK).await?;
    let data = body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "m1");
    Ok(())
}

#[tokio::test]
async fn showcase_surfaces_channel_listing_outage() -> Result<()> {
    let fake = FakeDiscord {
        down: true,
        ..FakeDiscord::default()
    };
    let server = TestServer::start(fake).await?;

    let body: Value =
        assert_json(server.get("/api/v1/showcase").await?, StatusCode::BAD_GATEWAY).await?;
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    assert_eq!(body["error"]["details"]["upstream_status"], 500);
    Ok(())
}

#[tokio::test]
async fn showcase_requires_category_when_unconfigured() -> Result<()> {
    let mut config = integration_tests::test_config();
    config.discord.showcase_category_id = None;
    let server = TestServer::start_with_config(FakeDiscord::default(), config).await?;

    assert_status(server.get("/api/v1/showcase").await?, StatusCode::BAD_REQUEST).await?;
    Ok(())
}

// ============================================================================
// Reputation feed
// ============================================================================

#[tokio::test]
async fn reputation_renders_mentions_and_markup() -> Result<()> {
    let mut fake = FakeDiscord::default();
    fake.messages.insert(
        "rep-chan".to_string(),
        vec![
            text_message(
                "r1",
                user("40", "alice"),
                "+rep <@9> **fast** trade",
                vec![user("9", "bob")],
            ),
            // Blank messages are dropped from the feed
            text_message("r2", user("40", "alice"), "   ", vec![]),
        ],
    );
    let server = TestServer::start(fake).await?;

    let body: Value = assert_json(
        server.get("/api/v1/reputation?channel=rep-chan").await?,
        StatusCode::OK,
    )
    .await?;
    let data = body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["content_html"], "+rep @bob <strong>fast</strong> trade");
    assert_eq!(data[0]["author_name"], "alice");
    Ok(())
}

#[tokio::test]
async fn reputation_requires_channel_param() -> Result<()> {
    let server = TestServer::start(FakeDiscord::default()).await?;

    let body: Value = assert_json(
        server.get("/api/v1/reputation").await?,
        StatusCode::BAD_REQUEST,
    )
    .await?;
    assert_eq!(body["error"]["code"], "INVALID_QUERY_PARAMETER");
    Ok(())
}

// ============================================================================
// Staff
// ============================================================================

fn staff_fake() -> FakeDiscord {
    FakeDiscord {
        members: vec![
            member("10", "alice", &[ROLE_OWNER, ROLE_SELLER]),
            member("11", "bob", &[ROLE_SELLER]),
            member("12", "carol", &[ROLE_MODERATOR]),
            member("13", "dave", &["unrelated-role"]),
        ],
        ..FakeDiscord::default()
    }
}

#[tokio::test]
async fn staff_roster_buckets_by_highest_tier() -> Result<()> {
    let server = TestServer::start(staff_fake()).await?;

    let body: Value = assert_json(server.get("/api/v1/staff").await?, StatusCode::OK).await?;
    let data = &body["data"];

    // Alice holds owner and seller roles but lists only under owner
    assert_eq!(data["owner"][0]["name"], "alice");
    assert_eq!(data["seller"].as_array().expect("seller array").len(), 1);
    assert_eq!(data["seller"][0]["name"], "bob");
    assert_eq!(data["moderator"][0]["name"], "carol");
    assert_eq!(data["co_owner"].as_array().expect("co_owner array").len(), 0);
    assert_eq!(data["total"], 3);
    Ok(())
}

#[tokio::test]
async fn staff_lookup_reports_tier() -> Result<()> {
    let server = TestServer::start(staff_fake()).await?;

    let body: Value = assert_json(server.get("/api/v1/staff/10").await?, StatusCode::OK).await?;
    assert_eq!(body["data"]["is_staff"], true);
    assert_eq!(body["data"]["tier"], "owner");
    assert_eq!(body["data"]["name"], "alice");
    Ok(())
}

#[tokio::test]
async fn staff_lookup_unknown_user_is_negative() -> Result<()> {
    let server = TestServer::start(staff_fake()).await?;

    let body: Value = assert_json(server.get("/api/v1/staff/999").await?, StatusCode::OK).await?;
    assert_eq!(body["data"]["is_staff"], false);
    assert!(body["data"].get("tier").is_none());
    Ok(())
}

#[tokio::test]
async fn staff_lookup_without_staff_role_is_negative() -> Result<()> {
    let server = TestServer::start(staff_fake()).await?;

    let body: Value = assert_json(server.get("/api/v1/staff/13").await?, StatusCode::OK).await?;
    assert_eq!(body["data"]["is_staff"], false);
    Ok(())
}

#[tokio::test]
async fn staff_lookup_surfaces_upstream_outage() -> Result<()> {
    let fake = FakeDiscord {
        down: true,
        ..FakeDiscord::default()
    };
    let server = TestServer::start(fake).await?;

    assert_status(server.get("/api/v1/staff/10").await?, StatusCode::BAD_GATEWAY).await?;
    Ok(())
}
