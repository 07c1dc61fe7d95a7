use crate::user::errors::PasswordPolicyError;

/// Pluggable password validation policy.
///
/// The service only requires a policy decision, not specific rules; swap
/// implementations to tighten requirements without touching the flow.
pub trait PasswordPolicy: Send + Sync + 'static {
    /// Check a candidate password.
    ///
    /// # Errors
    /// * `PasswordPolicyError` - Password violates the policy
    fn check(&self, password: &str) -> Result<(), PasswordPolicyError>;
}

/// Default policy: any non-empty password is acceptable.
pub struct NonEmptyPolicy;

impl PasswordPolicy for NonEmptyPolicy {
    fn check(&self, password: &str) -> Result<(), PasswordPolicyError> {
        if password.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }
        Ok(())
    }
}

/// Minimum-length policy, for deployments that want more than non-empty.
pub struct MinLengthPolicy {
    min: usize,
}

impl MinLengthPolicy {
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl PasswordPolicy for MinLengthPolicy {
    fn check(&self, password: &str) -> Result<(), PasswordPolicyError> {
        if password.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }
        if password.chars().count() < self.min {
            return Err(PasswordPolicyError::Rejected(format!(
                "minimum {} characters required",
                self.min
            )));
        }
        Ok(())
    }
}
