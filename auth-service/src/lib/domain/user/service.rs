use std::sync::Arc;

use async_trait::async_trait;
use auth_core::PasswordHasher;
use auth_core::TokenIssuer;
use auth_core::TokenVerification;
use chrono::Utc;

use crate::domain::user::models::AuthenticatedSession;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::PublicUser;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserRecord;
use crate::domain::user::policy::NonEmptyPolicy;
use crate::domain::user::policy::PasswordPolicy;
use crate::user::errors::AuthError;
use crate::user::models::EmailAddress;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserDirectory;

/// Authentication domain service.
///
/// Orchestrates registration and login over an injected [`UserDirectory`],
/// a password hasher, and a token issuer. Each call is independent; the
/// service holds no per-session state and login has no persistent side
/// effect.
pub struct AuthService<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    password_policy: Box<dyn PasswordPolicy>,
}

impl<D> AuthService<D>
where
    D: UserDirectory,
{
    /// Create an authentication service with default hashing cost and the
    /// non-empty password policy.
    ///
    /// # Arguments
    /// * `directory` - User storage collaborator
    /// * `token_issuer` - Configured token issuer (secret and TTL injected
    ///   at construction, not read from ambient state)
    pub fn new(directory: Arc<D>, token_issuer: TokenIssuer) -> Self {
        Self {
            directory,
            password_hasher: PasswordHasher::new(),
            token_issuer,
            password_policy: Box::new(NonEmptyPolicy),
        }
    }

    /// Replace the password hasher (work factor comes from configuration).
    pub fn with_password_hasher(mut self, hasher: PasswordHasher) -> Self {
        self.password_hasher = hasher;
        self
    }

    /// Replace the password validation policy.
    pub fn with_password_policy(mut self, policy: Box<dyn PasswordPolicy>) -> Self {
        self.password_policy = policy;
        self
    }
}

#[async_trait]
impl<D> AuthServicePort for AuthService<D>
where
    D: UserDirectory,
{
    async fn register(&self, command: RegisterCommand) -> Result<PublicUser, AuthError> {
        self.password_policy.check(&command.password)?;

        // Duplicate email is a first-class outcome, checked before any work
        if self
            .directory
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| AuthError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = UserRecord {
            id: UserId::new(),
            email: command.email,
            password_hash,
            first_name: command.first_name,
            last_name: command.last_name,
            created_at: Utc::now(),
        };

        let created = self.directory.create(user).await?;

        tracing::info!(user_id = %created.id, "User registered");

        Ok(PublicUser::from(&created))
    }

    async fn login(&self, credentials: Credentials) -> Result<AuthenticatedSession, AuthError> {
        // A malformed email must be indistinguishable from a wrong password
        let email = match EmailAddress::new(credentials.email) {
            Ok(email) => email,
            Err(_) => return Err(AuthError::InvalidCredentials),
        };

        let user = self
            .directory
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self
            .password_hasher
            .verify(&credentials.password, &user.password_hash)
        {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .token_issuer
            .issue(&user.id.to_string(), user.email.as_str())
            .map_err(|e| AuthError::Unknown(format!("Token issuance failed: {}", e)))?;

        tracing::debug!(user_id = %user.id, "Login succeeded");

        Ok(AuthenticatedSession {
            token,
            user: PublicUser::from(&user),
        })
    }

    fn verify_token(&self, token: &str) -> TokenVerification {
        self.token_issuer.verify(token)
    }

    async fn find_user(&self, email: &EmailAddress) -> Result<PublicUser, AuthError> {
        self.directory
            .find_by_email(email)
            .await?
            .map(|user| PublicUser::from(&user))
            .ok_or(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::user::errors::DirectoryError;
    use crate::user::errors::PasswordPolicyError;

    mock! {
        pub TestUserDirectory {}

        #[async_trait]
        impl UserDirectory for TestUserDirectory {
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<UserRecord>, DirectoryError>;
            async fn create(&self, user: UserRecord) -> Result<UserRecord, DirectoryError>;
        }
    }

    fn test_issuer() -> TokenIssuer {
        TokenIssuer::new(b"test-secret-key-for-jwt-signing-at-least-32-bytes")
    }

    fn test_email(raw: &str) -> EmailAddress {
        EmailAddress::new(raw.to_string()).unwrap()
    }

    fn stored_user(email: &str, password: &str) -> UserRecord {
        UserRecord {
            id: UserId::new(),
            email: test_email(email),
            password_hash: PasswordHasher::new().hash(password).unwrap(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut directory = MockTestUserDirectory::new();

        directory
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        directory
            .expect_create()
            .withf(|user| {
                user.email.as_str() == "a@x.com"
                    && user.password_hash.starts_with("$argon2")
                    && user.first_name == "A"
                    && user.last_name == "B"
            })
            .times(1)
            .returning(Ok);

        let service = AuthService::new(Arc::new(directory), test_issuer());

        let command = RegisterCommand::new(
            test_email("a@x.com"),
            "pw123".to_string(),
            "A".to_string(),
            "B".to_string(),
        );

        let user = service.register(command).await.unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.first_name, "A");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut directory = MockTestUserDirectory::new();

        directory
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(stored_user("a@x.com", "pw123"))));
        // No create attempt after a duplicate lookup
        directory.expect_create().times(0);

        let service = AuthService::new(Arc::new(directory), test_issuer());

        let command = RegisterCommand::new(
            test_email("a@x.com"),
            "other_pw".to_string(),
            "A".to_string(),
            "B".to_string(),
        );

        let result = service.register(command).await;
        assert!(matches!(result, Err(AuthError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_register_empty_password_rejected_before_lookup() {
        let mut directory = MockTestUserDirectory::new();
        directory.expect_find_by_email().times(0);
        directory.expect_create().times(0);

        let service = AuthService::new(Arc::new(directory), test_issuer());

        let command = RegisterCommand::new(
            test_email("a@x.com"),
            String::new(),
            "A".to_string(),
            "B".to_string(),
        );

        let result = service.register(command).await;
        assert!(matches!(
            result,
            Err(AuthError::WeakPassword(PasswordPolicyError::Empty))
        ));
    }

    #[tokio::test]
    async fn test_register_maps_directory_race_to_conflict() {
        let mut directory = MockTestUserDirectory::new();

        directory
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        directory.expect_create().times(1).returning(|user| {
            Err(DirectoryError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });

        let service = AuthService::new(Arc::new(directory), test_issuer());

        let command = RegisterCommand::new(
            test_email("a@x.com"),
            "pw123".to_string(),
            "A".to_string(),
            "B".to_string(),
        );

        let result = service.register(command).await;
        assert!(matches!(result, Err(AuthError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_login_success_token_verifies() {
        let user = stored_user("a@x.com", "pw123");
        let user_id = user.id;

        let mut directory = MockTestUserDirectory::new();
        directory
            .expect_find_by_email()
            .withf(|email| email.as_str() == "a@x.com")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(directory), test_issuer());

        let session = service
            .login(Credentials {
                email: "a@x.com".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(session.user.id, user_id);
        match service.verify_token(&session.token) {
            TokenVerification::Valid(claims) => {
                assert_eq!(claims.sub, user_id.to_string());
                assert_eq!(claims.email, "a@x.com");
            }
            other => panic!("Expected Valid, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut directory = MockTestUserDirectory::new();
        directory
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(stored_user("a@x.com", "pw123"))));

        let service = AuthService::new(Arc::new(directory), test_issuer());

        let result = service
            .login(Credentials {
                email: "a@x.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut directory = MockTestUserDirectory::new();
        directory
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(directory), test_issuer());

        let result = service
            .login(Credentials {
                email: "nobody@x.com".to_string(),
                password: "pw123".to_string(),
            })
            .await;

        // Same outcome as a wrong password
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_malformed_email_skips_directory() {
        let mut directory = MockTestUserDirectory::new();
        directory.expect_find_by_email().times(0);

        let service = AuthService::new(Arc::new(directory), test_issuer());

        let result = service
            .login(Credentials {
                email: "not-an-email".to_string(),
                password: "pw123".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_uppercase_email_matches() {
        let mut directory = MockTestUserDirectory::new();
        directory
            .expect_find_by_email()
            .withf(|email| email.as_str() == "a@x.com")
            .times(1)
            .returning(|_| Ok(Some(stored_user("a@x.com", "pw123"))));

        let service = AuthService::new(Arc::new(directory), test_issuer());

        let session = service
            .login(Credentials {
                email: "A@X.COM".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(session.user.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_find_user_missing_maps_to_unauthorized() {
        let mut directory = MockTestUserDirectory::new();
        directory
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(directory), test_issuer());

        let result = service.find_user(&test_email("gone@x.com")).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
