//! Credential authentication primitives
//!
//! Provides the cryptographic building blocks for the authentication service:
//! - Password hashing and verification (Argon2id, salted)
//! - Signed session token issuance and verification (JWT, HS256)
//!
//! The service layer composes these; nothing in this crate touches storage or
//! transport.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth_core::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth_core::{TokenIssuer, TokenVerification};
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!");
//! let token = issuer.issue("user123", "user@example.com").unwrap();
//! match issuer.verify(&token) {
//!     TokenVerification::Valid(claims) => assert_eq!(claims.sub, "user123"),
//!     _ => panic!("freshly issued token must verify"),
//! }
//! ```

pub mod password;
pub mod token;

pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TokenVerification;
