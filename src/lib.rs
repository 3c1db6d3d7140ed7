pub mod check;
pub mod error;
pub mod logger;
pub mod report;
pub mod runner;
pub mod suite;

// Re-export commonly used types
pub use error::{Result, RusmokeError};
