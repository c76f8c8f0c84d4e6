pub mod config;
pub mod error;
pub mod user;

// Re-export common error type
pub use error::PocketPalError;
