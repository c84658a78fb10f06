//! Integration test utilities for the vitrine server
//!
//! This crate provides helpers for running end-to-end tests against the
//! REST API with an in-memory Discord fake behind it.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
