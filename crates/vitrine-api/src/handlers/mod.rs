//! Request handlers

pub mod health;
pub mod reputation;
pub mod showcase;
pub mod staff;
