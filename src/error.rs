use thiserror::Error;

#[derive(Error, Debug)]
pub enum RusmokeError {
    /// The suite document could not be parsed into a suite: wrong encoding,
    /// malformed structure, or an unknown check kind. Fatal to a run.
    #[error("format error: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl RusmokeError {
    /// Format error for a kind discriminator with no registered variant.
    pub fn unknown_kind(kind: &str) -> Self {
        RusmokeError::Format(format!("unknown check kind '{kind}'"))
    }
}

// Add conversion from anyhow::Error
impl From<anyhow::Error> for RusmokeError {
    fn from(err: anyhow::Error) -> Self {
        RusmokeError::Other(err.to_string())
    }
}

/// Result type for rusmoke crate
pub type Result<T> = std::result::Result<T, RusmokeError>;
