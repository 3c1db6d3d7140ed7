use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::check::types::{Check, CheckFailure, encode_params};

/// Checks that a file's SHA-256 digest matches an expected hex string.
///
/// The comparison is case-insensitive on the hex digits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileChecksumCheck {
    pub name: String,

    pub path: PathBuf,

    /// Expected SHA-256 digest, lowercase or uppercase hex
    pub sha256: String,
}

impl FileChecksumCheck {
    pub const KIND: &'static str = "file_checksum";

    pub fn example() -> Self {
        Self {
            name: "configuration file is unmodified".to_string(),
            path: PathBuf::from("/opt/app/etc/app.conf"),
            sha256: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
                .to_string(),
        }
    }
}

impl Check for FileChecksumCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn execute(&self) -> Result<(), CheckFailure> {
        let bytes = std::fs::read(&self.path).map_err(|e| {
            CheckFailure::error_with(format!("cannot read {}", self.path.display()), e)
        })?;

        let actual = format!("{:x}", Sha256::digest(&bytes));

        if !actual.eq_ignore_ascii_case(&self.sha256) {
            return Err(CheckFailure::failed(format!(
                "checksum mismatch for {}: expected {}, actual {}",
                self.path.display(),
                self.sha256,
                actual
            )));
        }

        Ok(())
    }

    fn params(&self) -> crate::Result<Value> {
        encode_params(self)
    }
}
