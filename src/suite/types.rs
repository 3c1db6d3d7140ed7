use std::path::PathBuf;

use crate::check::registry::CheckRegistry;
use crate::check::types::{Check, CheckRecord};

/// An ordered collection of checks loaded from or saved to a single
/// persisted document.
///
/// Insertion order is significant: it is the execution order and the report
/// order. A suite may be empty; running an empty suite is a no-op producing
/// zero counts. The runner treats a suite as read-only input.
#[derive(Debug)]
pub struct TestSuite {
    /// Provenance: set when loaded from or saved to a document, absent for
    /// suites built purely in memory
    pub source_path: Option<PathBuf>,

    /// Checks in declaration order
    pub checks: Vec<Box<dyn Check>>,
}

impl TestSuite {
    /// Create a new empty suite
    pub fn new() -> Self {
        Self {
            source_path: None,
            checks: Vec::new(),
        }
    }

    /// Suite populated with one example instance of every kind the registry
    /// knows, for the "create a template" authoring flow.
    pub fn with_example_data(registry: &CheckRegistry) -> Self {
        Self {
            source_path: None,
            checks: registry.examples(),
        }
    }

    pub fn with_source_path(mut self, path: PathBuf) -> Self {
        self.source_path = Some(path);
        self
    }

    pub fn add_check(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Encode every check into its persisted record, preserving order.
    pub fn records(&self) -> crate::Result<Vec<CheckRecord>> {
        self.checks.iter().map(|c| CheckRecord::from_check(c.as_ref())).collect()
    }
}

impl Default for TestSuite {
    fn default() -> Self {
        Self::new()
    }
}
