//! whisperer-common — Shared types, errors, and configuration used across all
//! Data Whisperer crates.

pub mod confidence;
pub mod error;
pub mod server_config;

pub use confidence::ConfidenceBucket;
pub use error::{ApiError, Result, WhispererError};
pub use server_config::ServerConfig;
