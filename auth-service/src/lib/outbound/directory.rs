use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::UserRecord;
use crate::user::errors::DirectoryError;
use crate::user::models::EmailAddress;
use crate::user::ports::UserDirectory;

/// In-memory user directory.
///
/// Reference adapter for the [`UserDirectory`] port; a production deployment
/// swaps in a durable store behind the same trait. The uniqueness check and
/// the insert happen under one write lock, which gives the check-then-create
/// atomicity the port requires.
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<EmailAddress, UserRecord>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserRecord>, DirectoryError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn create(&self, user: UserRecord) -> Result<UserRecord, DirectoryError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.email) {
            return Err(DirectoryError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }
}
