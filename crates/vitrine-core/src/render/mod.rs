//! Content normalization and safe-rendering pipeline
//!
//! Converts untrusted chat text into markup safe for direct display. The
//! pipeline order is load-bearing: shortcodes are translated first, then the
//! whole string is escaped, and only then are the trusted markup patterns
//! re-introduced by matching the escaped forms of their delimiters - so
//! user-supplied text can never forge them.

mod escape;
mod fields;
mod markup;
mod mention;
mod shortcode;

pub use escape::escape_markup;
pub use fields::{group_fields, is_meaningful, normalize_fields};
pub use markup::render_safely;
pub use mention::{resolve_mentions, MentionMap};
pub use shortcode::{translate_shortcodes, ShortcodeTable};
