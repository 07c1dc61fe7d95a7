pub mod directory;

pub use directory::InMemoryUserDirectory;
