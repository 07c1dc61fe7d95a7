use thiserror::Error;

/// Error type for token issuance.
///
/// Verification does not error; it returns the tagged
/// [`TokenVerification`](super::TokenVerification) result instead.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}
