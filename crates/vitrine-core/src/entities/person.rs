//! Person entity and avatar URL derivation

use serde::Serialize;

const CDN_BASE: &str = "https://cdn.discordapp.com";

/// Number of stock fallback avatars on the CDN.
const FALLBACK_AVATAR_COUNT: u64 = 6;

/// A displayable member: identity, display name, optional avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Build the CDN URL for a custom avatar hash.
pub fn avatar_url(user_id: &str, avatar_hash: &str) -> String {
    format!("{CDN_BASE}/avatars/{user_id}/{avatar_hash}.png?size=64")
}

/// Deterministic fallback avatar for users without a custom one.
///
/// The index is the user id modulo the stock avatar count; ids that fail to
/// parse use index 0. This is the only place an identifier is treated as a
/// number.
pub fn fallback_avatar_url(user_id: &str) -> String {
    let index = user_id
        .parse::<u64>()
        .map(|id| id % FALLBACK_AVATAR_COUNT)
        .unwrap_or(0);
    format!("{CDN_BASE}/embed/avatars/{index}.png")
}
