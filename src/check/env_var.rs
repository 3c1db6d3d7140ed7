use std::env::VarError;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::check::types::{Check, CheckFailure, encode_params};

/// Checks that an environment variable is set, optionally to an exact value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvVarCheck {
    pub name: String,

    /// Variable to probe in the runner's environment
    pub variable: String,

    /// Exact value required; any value is accepted when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
}

impl EnvVarCheck {
    pub const KIND: &'static str = "env_var";

    pub fn example() -> Self {
        Self {
            name: "deployment environment is set".to_string(),
            variable: "APP_ENV".to_string(),
            expected: Some("production".to_string()),
        }
    }
}

impl Check for EnvVarCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn execute(&self) -> Result<(), CheckFailure> {
        let value = match std::env::var(&self.variable) {
            Ok(value) => value,
            Err(VarError::NotPresent) => {
                return Err(CheckFailure::failed(format!(
                    "environment variable {} is not set",
                    self.variable
                )));
            }
            Err(e @ VarError::NotUnicode(_)) => {
                return Err(CheckFailure::error_with(
                    format!("environment variable {} is not valid unicode", self.variable),
                    e,
                ));
            }
        };

        if let Some(expected) = &self.expected
            && &value != expected
        {
            return Err(CheckFailure::failed(format!(
                "environment variable {} is '{}', expected '{}'",
                self.variable, value, expected
            )));
        }

        Ok(())
    }

    fn params(&self) -> crate::Result<Value> {
        encode_params(self)
    }
}
