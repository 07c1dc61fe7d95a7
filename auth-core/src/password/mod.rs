pub mod argon2;
pub mod errors;

pub use argon2::PasswordHasher;
pub use argon2::DEFAULT_HASH_COST;
pub use errors::PasswordError;
