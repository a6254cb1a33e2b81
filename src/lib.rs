//! Mattermost API Client
//!
//! Typed async client for the Mattermost REST API v4:
//! - Entity types (users, teams, channels, posts) with server-faithful JSON
//! - Bearer-token authentication
//! - Conditional requests via etags with `304 Not Modified` passthrough
//! - Structured API error envelopes
//! - Convenience operations: `@username` channel resolution, attachment
//!   posts, bulk thread-follow toggles
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mattermost_client::services::posts::PostsServiceTrait;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from environment
//!     let client = mattermost_client::create_client_from_env()?;
//!
//!     // Post a direct message by username
//!     let response = client
//!         .posts()
//!         .create_post_with_attachment("@alice", "Hello!", "", Default::default())
//!         .await?;
//!
//!     if let Some(post) = response.body {
//!         println!("Posted: {}", post.id);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod routes;
pub mod transport;
pub mod types;

// Services
pub mod services;

// Testing utilities
pub mod fixtures;
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::{MattermostClient, MattermostClientImpl};
pub use config::{MattermostConfig, MattermostConfigBuilder};
pub use errors::{AppError, MattermostError, MattermostResult};
pub use transport::{ClientResponse, ResponseMeta};
pub use types::user::ME;

/// Default base URL for a local Mattermost server
pub const DEFAULT_BASE_URL: &str = "http://localhost:8065";

/// Default timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path of the versioned API root, relative to the server base URL
pub const API_URL_SUFFIX: &str = "/api/v4";

/// Create a Mattermost client with the given configuration
pub fn create_client(config: MattermostConfig) -> MattermostResult<MattermostClientImpl> {
    MattermostClientImpl::new(config)
}

/// Create a Mattermost client from environment variables
///
/// Reads:
/// - `MATTERMOST_URL` - Server base URL
/// - `MATTERMOST_TOKEN` - Bearer token
/// - `MATTERMOST_TIMEOUT` - Request timeout in seconds
pub fn create_client_from_env() -> MattermostResult<MattermostClientImpl> {
    let config = MattermostConfig::from_env()?;
    create_client(config)
}
