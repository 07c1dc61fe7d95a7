use async_trait::async_trait;
use auth_core::TokenVerification;

use crate::domain::user::models::AuthenticatedSession;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::PublicUser;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::UserRecord;
use crate::user::errors::AuthError;
use crate::user::errors::DirectoryError;
use crate::user::models::EmailAddress;

/// Port for authentication service operations.
///
/// The HTTP adapter and tests program against this seam.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated email plus raw password and display names
    ///
    /// # Returns
    /// Public view of the created user (never the password hash)
    ///
    /// # Errors
    /// * `WeakPassword` - Password violates the configured policy
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Directory` / `Unknown` - Store or crypto failure
    async fn register(&self, command: RegisterCommand) -> Result<PublicUser, AuthError>;

    /// Verify credentials and issue a session token.
    ///
    /// # Arguments
    /// * `credentials` - Raw email and password as submitted
    ///
    /// # Returns
    /// Bearer token plus public user view
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, malformed email, or wrong
    ///   password; indistinguishable by design
    /// * `Directory` / `Unknown` - Store or crypto failure
    async fn login(&self, credentials: Credentials) -> Result<AuthenticatedSession, AuthError>;

    /// Verify a bearer token's signature and expiry.
    ///
    /// Pure and fails closed; the tagged result lets callers distinguish
    /// expired tokens (re-login) from malformed or forged ones.
    fn verify_token(&self, token: &str) -> TokenVerification;

    /// Look up the public view of a user by email.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No such user (a valid token for a removed
    ///   user is treated as unauthorized)
    /// * `Directory` - Store failure
    async fn find_user(&self, email: &EmailAddress) -> Result<PublicUser, AuthError>;
}

/// External collaborator providing durable user storage and lookup.
///
/// Implementations must make `create` atomic with respect to the uniqueness
/// check, or the email-uniqueness invariant can race across concurrent
/// registrations.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Retrieve a user by (normalized) email address.
    ///
    /// # Returns
    /// Optional user record (None if not found)
    ///
    /// # Errors
    /// * `Unavailable` - Store operation failed
    async fn find_by_email(&self, email: &EmailAddress)
        -> Result<Option<UserRecord>, DirectoryError>;

    /// Persist a new user.
    ///
    /// # Returns
    /// The created user record
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Unavailable` - Store operation failed
    async fn create(&self, user: UserRecord) -> Result<UserRecord, DirectoryError>;
}
