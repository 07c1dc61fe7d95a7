//! Client-side session handling for the authentication service
//!
//! Holds the current bearer token in an injected [`TokenStore`], attaches it
//! to outgoing requests, and wraps the generic `get/post/put/delete` helpers
//! with the service's error-body decoding.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use session_client::InMemoryTokenStore;
//! use session_client::SessionClient;
//!
//! # async fn example() -> Result<(), session_client::ClientError> {
//! let client = SessionClient::new(
//!     "http://localhost:8080",
//!     Arc::new(InMemoryTokenStore::new()),
//! );
//!
//! let profile: serde_json::Value = client.get("/api/users/me").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod errors;
pub mod store;

pub use client::SessionClient;
pub use errors::ClientError;
pub use errors::StoreError;
pub use store::FileTokenStore;
pub use store::InMemoryTokenStore;
pub use store::TokenStore;
