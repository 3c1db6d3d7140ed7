use std::time::Duration;

/// Outcome of one executed check
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Check name, as declared in the suite
    pub name: String,

    /// Check kind tag
    pub kind: String,

    /// Whether the check passed
    pub passed: bool,

    /// Failure message (if the check did not pass)
    pub message: Option<String>,

    /// Execution duration of this check
    pub duration: Duration,
}

impl CheckResult {
    pub fn pass(name: String, kind: String, duration: Duration) -> Self {
        Self {
            name,
            kind,
            passed: true,
            message: None,
            duration,
        }
    }

    pub fn fail(name: String, kind: String, message: String, duration: Duration) -> Self {
        Self {
            name,
            kind,
            passed: false,
            message: Some(message),
            duration,
        }
    }
}

/// Aggregate of one run: counts, elapsed time, verdict.
///
/// `total == passed + failed` always; `total` equals the suite's check count
/// at the moment the run started.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn from_results(results: &[CheckResult], elapsed: Duration) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
            elapsed,
        }
    }

    /// Overall verdict: true only if every check passed
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
