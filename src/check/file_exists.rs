use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::check::types::{Check, CheckFailure, encode_params};

/// Checks that a path exists and refers to a regular file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileExistsCheck {
    pub name: String,

    /// Path expected to be present on the deployed host
    pub path: PathBuf,
}

impl FileExistsCheck {
    pub const KIND: &'static str = "file_exists";

    pub fn example() -> Self {
        Self {
            name: "application binary is deployed".to_string(),
            path: PathBuf::from("/opt/app/bin/server"),
        }
    }
}

impl Check for FileExistsCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn execute(&self) -> Result<(), CheckFailure> {
        let metadata = match std::fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CheckFailure::failed(format!(
                    "file does not exist: {}",
                    self.path.display()
                )));
            }
            Err(e) => {
                return Err(CheckFailure::error_with(
                    format!("cannot stat {}", self.path.display()),
                    e,
                ));
            }
        };

        if !metadata.is_file() {
            return Err(CheckFailure::failed(format!(
                "not a regular file: {}",
                self.path.display()
            )));
        }

        Ok(())
    }

    fn params(&self) -> crate::Result<Value> {
        encode_params(self)
    }
}
