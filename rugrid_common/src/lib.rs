//! Common types and utilities for the rugrid crates.

pub mod config;
pub mod error;
pub mod metrics;

// Re-export the shared dependency stack so that the other rugrid crates
// only need to depend on `rugrid_common`.
pub use anyhow;
pub use clap;
pub use rand;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;
pub use tracing_subscriber;
