use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::check::registry::{CheckRegistry, builtin_registry};
use crate::check::types::CheckRecord;
use crate::error::RusmokeError;
use crate::suite::types::TestSuite;

/// On-disk shape of a suite: a tagged, ordered list of check records.
///
/// Suite-level provenance (the source path) lives only in memory and never
/// appears in the document. The format is an explicit contract: every record
/// carries its kind discriminator, and an unrecognized discriminator is a
/// hard format error on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuiteDocument {
    pub tests: Vec<CheckRecord>,
}

impl TestSuite {
    /// Load a suite from a UTF-8 JSON document on disk, reconstructing
    /// checks through the built-in registry.
    pub fn load(path: &Path) -> crate::Result<Self> {
        Self::load_with(path, builtin_registry())
    }

    /// Load with an explicit registry (custom check kinds).
    pub fn load_with(path: &Path, registry: &CheckRegistry) -> crate::Result<Self> {
        tracing::debug!(path = %path.display(), "loading suite document");
        let bytes = std::fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|e| {
            RusmokeError::Format(format!(
                "suite document {} is not valid UTF-8: {e}",
                path.display()
            ))
        })?;
        let suite = Self::from_document(&text, registry)?;
        Ok(suite.with_source_path(path.to_path_buf()))
    }

    /// Parse a suite from document text. Any shape problem, including an
    /// unknown kind discriminator, fails the whole load: no partial suite.
    pub fn from_document(text: &str, registry: &CheckRegistry) -> crate::Result<Self> {
        let document: SuiteDocument = serde_json::from_str(text)
            .map_err(|e| RusmokeError::Format(format!("malformed suite document: {e}")))?;

        let mut suite = TestSuite::new();
        for record in &document.tests {
            suite.add_check(registry.decode(record)?);
        }
        tracing::debug!(checks = suite.len(), "suite document parsed");
        Ok(suite)
    }

    /// Serialize to document text: order-preserving and losslessly
    /// round-trippable through `from_document`.
    pub fn to_document(&self) -> crate::Result<String> {
        let document = SuiteDocument {
            tests: self.records()?,
        };
        serde_json::to_string_pretty(&document)
            .map_err(|e| RusmokeError::Format(format!("cannot encode suite document: {e}")))
    }

    /// Write the suite document to disk and record the path as provenance.
    pub fn save(&mut self, path: &Path) -> crate::Result<()> {
        let text = self.to_document()?;
        std::fs::write(path, text)?;
        self.source_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), checks = self.len(), "suite document written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{EnvVarCheck, FileExistsCheck, HttpReachableCheck};
    use tempfile::TempDir;

    fn sample_suite() -> TestSuite {
        let mut suite = TestSuite::new();
        suite.add_check(Box::new(FileExistsCheck {
            name: "binary present".to_string(),
            path: "/opt/app/bin/server".into(),
        }));
        suite.add_check(Box::new(EnvVarCheck {
            name: "env set".to_string(),
            variable: "APP_ENV".to_string(),
            expected: Some("production".to_string()),
        }));
        suite.add_check(Box::new(HttpReachableCheck {
            name: "health up".to_string(),
            url: "http://localhost:8080/health".to_string(),
            expected_status: Some(200),
            timeout_secs: 5,
        }));
        suite
    }

    #[test]
    fn test_document_roundtrip_preserves_records_and_order() {
        let suite = sample_suite();
        let text = suite.to_document().unwrap();

        let loaded = TestSuite::from_document(&text, builtin_registry()).unwrap();
        assert_eq!(loaded.records().unwrap(), suite.records().unwrap());

        let names: Vec<_> = loaded.checks.iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names, vec!["binary present", "env set", "health up"]);
    }

    #[test]
    fn test_save_and_load_sets_provenance() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("suite.json");

        let mut suite = sample_suite();
        assert_eq!(suite.source_path, None);
        suite.save(&path).unwrap();
        assert_eq!(suite.source_path.as_deref(), Some(path.as_path()));

        let loaded = TestSuite::load(&path).unwrap();
        assert_eq!(loaded.source_path.as_deref(), Some(path.as_path()));
        assert_eq!(loaded.records().unwrap(), suite.records().unwrap());
    }

    #[test]
    fn test_unknown_kind_is_format_error() {
        let text = r#"{"tests": [
            {"kind": "file_exists", "name": "ok", "path": "/tmp/x"},
            {"kind": "quantum_probe", "name": "future", "qubits": 3}
        ]}"#;
        let err = TestSuite::from_document(text, builtin_registry()).unwrap_err();
        assert!(matches!(err, RusmokeError::Format(_)));
        assert!(err.to_string().contains("quantum_probe"));
    }

    #[test]
    fn test_truncated_document_is_format_error() {
        let text = r#"{"tests": [{"kind": "file_exists", "name": "#;
        let err = TestSuite::from_document(text, builtin_registry()).unwrap_err();
        assert!(matches!(err, RusmokeError::Format(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = TestSuite::load(&temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, RusmokeError::Io(_)));
    }

    #[test]
    fn test_non_utf8_document_is_format_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("utf16.json");
        // UTF-16LE encoded "{}" with BOM, as a legacy tool might have written
        std::fs::write(&path, [0xFF, 0xFE, 0x7B, 0x00, 0x7D, 0x00]).unwrap();

        let err = TestSuite::load(&path).unwrap_err();
        assert!(matches!(err, RusmokeError::Format(_)));
    }

    #[test]
    fn test_example_data_roundtrips() {
        let suite = TestSuite::with_example_data(builtin_registry());
        let text = suite.to_document().unwrap();
        let loaded = TestSuite::from_document(&text, builtin_registry()).unwrap();
        assert_eq!(loaded.records().unwrap(), suite.records().unwrap());
    }
}
