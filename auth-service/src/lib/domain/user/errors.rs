use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for password policy violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password must not be empty")]
    Empty,

    #[error("Password rejected: {0}")]
    Rejected(String),
}

/// Errors produced by the user directory collaborator.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("Email already registered: {0}")]
    EmailAlreadyExists(String),

    #[error("User directory unavailable: {0}")]
    Unavailable(String),
}

/// Top-level error for all authentication operations.
///
/// Every internal failure is converted into one of these before it crosses
/// the service boundary; the transport layer maps them onto the four-way
/// taxonomy (validation / conflict / unauthorized / unexpected).
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Validation errors (4xx)
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    WeakPassword(#[from] PasswordPolicyError),

    // Conflict (409)
    #[error("Email already registered: {0}")]
    EmailAlreadyExists(String),

    // Unauthorized (401); deliberately under-specific to the client
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Unexpected (500)
    #[error("User directory error: {0}")]
    Directory(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<DirectoryError> for AuthError {
    fn from(err: DirectoryError) -> Self {
        match err {
            // Uniqueness races inside the store surface as the same
            // first-class conflict as the pre-check
            DirectoryError::EmailAlreadyExists(email) => AuthError::EmailAlreadyExists(email),
            DirectoryError::Unavailable(msg) => AuthError::Directory(msg),
        }
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        AuthError::Unknown(err.to_string())
    }
}
