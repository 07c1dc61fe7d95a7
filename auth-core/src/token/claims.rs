use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a session token.
///
/// The payload is fixed by the login contract: a user identity (`sub`,
/// `email`) plus issue and absolute expiry timestamps. Expiry is wall-clock,
/// not sliding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: user identifier
    pub sub: String,

    /// Email address of the subject
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user session expiring `ttl` from now.
    pub fn new(user_id: impl ToString, email: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Check whether the claims are expired at `current_timestamp`.
    ///
    /// A token is considered expired from the exact second of its `exp`
    /// claim onward, so a zero-TTL token is never valid.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new("user123", "user@example.com", Duration::hours(24));

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "user123".to_string(),
            email: "user@example.com".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // expiry instant counts as expired
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let claims = Claims::new("user123", "user@example.com", Duration::zero());
        assert!(claims.is_expired(Utc::now().timestamp()));
    }
}
