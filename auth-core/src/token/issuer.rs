use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Default token lifetime: one day.
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Outcome of verifying a session token.
///
/// Callers distinguish "needs re-login" (`Expired`, `Invalid`) by tag;
/// verification is pure and fails closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenVerification {
    /// Signature and expiry check out; claims are trustworthy.
    Valid(Claims),
    /// Correctly signed but past its absolute expiry.
    Expired,
    /// Malformed token or bad signature.
    Invalid,
}

/// Issues and verifies signed session tokens.
///
/// Uses HS256 (HMAC with SHA-256) with a process-wide secret injected at
/// construction. Rotating the secret invalidates all previously issued
/// tokens; there is no graceful rotation.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create a token issuer with the default one-day TTL.
    ///
    /// # Arguments
    /// * `secret` - Signing secret; should be at least 32 bytes for HS256
    ///   and come from configuration, never from code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECONDS),
        }
    }

    /// Override the default token lifetime.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Issue a signed token for a user identity with the configured TTL.
    ///
    /// # Arguments
    /// * `user_id` - Subject claim
    /// * `email` - Email claim
    ///
    /// # Returns
    /// Signed JWT string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, user_id: &str, email: &str) -> Result<String, TokenError> {
        self.issue_with_ttl(user_id, email, self.ttl)
    }

    /// Issue a signed token with an explicit TTL.
    pub fn issue_with_ttl(
        &self,
        user_id: &str,
        email: &str,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(user_id, email, ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry.
    ///
    /// Signature is checked first; only a correctly signed token can report
    /// `Expired`. Expiry is evaluated against the current wall clock with no
    /// leeway, so `exp <= now` is expired.
    pub fn verify(&self, token: &str) -> TokenVerification {
        // Expiry is checked explicitly below; jsonwebtoken's own check
        // applies leeway and an exclusive bound.
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let claims = match decode::<Claims>(token, &self.decoding_key, &validation) {
            Ok(data) => data.claims,
            Err(_) => return TokenVerification::Invalid,
        };

        if claims.is_expired(Utc::now().timestamp()) {
            return TokenVerification::Expired;
        }

        TokenVerification::Valid(claims)
    }
}
