//! Domain entities
//!
//! All entities are read-only after construction from fetch results; the
//! transforms in [`crate::render`] return new values instead of mutating.

mod embed;
mod message;
mod person;

pub use embed::{Embed, EmbedAuthor, EmbedField, EmbedFooter, FieldGroup, DEFAULT_ACCENT_COLOR};
pub use message::ChatMessage;
pub use person::{avatar_url, fallback_avatar_url, Person};
