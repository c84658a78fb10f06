//! # vitrine-core
//!
//! Domain layer containing entities, the safe-rendering pipeline, field
//! grouping, roster bucketing, and the fetch traits implemented by the
//! infrastructure layer. This crate has zero dependencies on HTTP clients
//! or web frameworks.

pub mod entities;
pub mod render;
pub mod roster;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    avatar_url, fallback_avatar_url, ChatMessage, Embed, EmbedAuthor, EmbedField, EmbedFooter,
    FieldGroup, Person, DEFAULT_ACCENT_COLOR,
};
pub use render::{
    escape_markup, group_fields, is_meaningful, normalize_fields, render_safely, resolve_mentions,
    translate_shortcodes, MentionMap, ShortcodeTable,
};
pub use roster::{bucket_members, RoleBuckets, RoleMap, RoleTier};
pub use traits::{
    ChannelInfo, FetchError, FetchResult, MemberDirectory, MessageSource, SourceEmbed,
    SourceMember, SourceMessage, SourceUser, UpstreamProbe,
};
