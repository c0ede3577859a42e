//! Data models: runtime configuration and extraction records.

pub mod config;
pub mod record;
