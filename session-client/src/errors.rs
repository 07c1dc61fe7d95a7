use thiserror::Error;

/// Error type for token store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Token store I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for session client requests.
///
/// A failed request is never swallowed: non-success responses surface as
/// `Api` with the server's message when one was provided.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("Token store error: {0}")]
    Store(#[from] StoreError),
}
