pub mod config;
pub mod error;
pub mod session;
pub mod speech;
pub mod translate;

// Re-export common error type
pub use error::CalloutError;
