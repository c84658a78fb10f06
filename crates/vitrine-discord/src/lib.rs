//! Discord REST integration
//!
//! Thin HTTP layer mapping Discord API payloads onto the core source types.

mod client;
mod mappers;
mod wire;

pub use client::DiscordClient;
