use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RusmokeError;

/// Underlying cause preserved by a `CheckFailure::Error`
pub type Cause = Box<dyn std::error::Error + Send + Sync>;

/// One self-contained, binary pass/fail verification unit.
///
/// Implementations own their full parameter set; `execute` takes no further
/// input and must not mutate system state (read-only probing only).
pub trait Check: std::fmt::Debug {
    /// Human-readable identifier, unique within a suite by convention
    fn name(&self) -> &str;

    /// Variant tag: serialization discriminator and report label
    fn kind(&self) -> &'static str;

    /// Perform the check. Returns normally on success.
    fn execute(&self) -> Result<(), CheckFailure>;

    /// Encode the check's parameters as a JSON object (the `kind` tag is
    /// added by the record, not stored as a parameter).
    fn params(&self) -> crate::Result<Value>;
}

/// Why a single check did not pass.
///
/// `Failed` means the condition was evaluated and found false; `Error` means
/// the check could not be attempted at all. The runner aggregates both the
/// same way, but `Error` carries its cause into the report.
#[derive(Debug, thiserror::Error)]
pub enum CheckFailure {
    #[error("{0}")]
    Failed(String),

    #[error("{message}")]
    Error {
        message: String,
        #[source]
        source: Option<Cause>,
    },
}

impl CheckFailure {
    pub fn failed(message: impl Into<String>) -> Self {
        CheckFailure::Failed(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        CheckFailure::Error {
            message: message.into(),
            source: None,
        }
    }

    pub fn error_with(message: impl Into<String>, source: impl Into<Cause>) -> Self {
        CheckFailure::Error {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Underlying cause, if the check could not even be attempted
    pub fn cause(&self) -> Option<&Cause> {
        match self {
            CheckFailure::Failed(_) => None,
            CheckFailure::Error { source, .. } => source.as_ref(),
        }
    }
}

/// One tagged record of the persisted suite document: the kind discriminator
/// plus the variant's own parameter fields, flattened alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckRecord {
    /// Discriminator selecting the variant on load
    pub kind: String,

    /// Variant-specific parameters, preserved verbatim
    #[serde(flatten)]
    pub params: serde_json::Map<String, Value>,
}

impl CheckRecord {
    /// Encode a live check into its persisted record.
    pub fn from_check(check: &dyn Check) -> crate::Result<Self> {
        let value = check.params()?;
        let Value::Object(params) = value else {
            return Err(RusmokeError::Format(format!(
                "check '{}' parameters must encode to an object",
                check.name()
            )));
        };
        Ok(CheckRecord {
            kind: check.kind().to_string(),
            params,
        })
    }
}

/// Encode a serde-serializable check as its parameter object.
pub fn encode_params<T: Serialize>(check: &T) -> crate::Result<Value> {
    serde_json::to_value(check)
        .map_err(|e| RusmokeError::Format(format!("cannot encode check parameters: {e}")))
}
