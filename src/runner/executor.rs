use std::time::Instant;

use chrono::Local;

use crate::check::types::Check;
use crate::report::sink::{ReportSink, Severity};
use crate::runner::types::{CheckResult, RunSummary};
use crate::suite::types::TestSuite;

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
const CHECK_PASSED_MESSAGE: &str = "OK!";

fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Executes a suite's checks strictly in order and aggregates outcomes.
///
/// A failing check is recorded and reported, never allowed to abort the
/// suite. The runner is the only writer to its sink; sink write failures are
/// the one thing that does propagate out of `run`.
pub struct SuiteRunner<'a> {
    sink: &'a mut dyn ReportSink,
    results: Vec<CheckResult>,
}

impl<'a> SuiteRunner<'a> {
    pub fn new(sink: &'a mut dyn ReportSink) -> Self {
        Self {
            sink,
            results: Vec::new(),
        }
    }

    /// Per-check outcomes of the last completed run
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Run every check in suite order, one at a time, to completion.
    pub fn run(&mut self, suite: &TestSuite) -> crate::Result<RunSummary> {
        self.results.clear();
        let started = Instant::now();

        self.sink
            .write_line(Severity::Info, &format!("Running Tests: {}", timestamp()))?;
        self.sink.write_line(Severity::Info, "")?;

        for check in &suite.checks {
            let result = self.run_check(check.as_ref())?;
            self.results.push(result);
        }

        self.sink.write_line(Severity::Info, "")?;
        self.sink
            .write_line(Severity::Info, &format!("Completed Tests: {}", timestamp()))?;

        let summary = RunSummary::from_results(&self.results, started.elapsed());
        self.write_totals(&summary)?;
        Ok(summary)
    }

    fn run_check(&mut self, check: &dyn Check) -> crate::Result<CheckResult> {
        self.sink.write_line(
            Severity::Info,
            &format!("{}, {}, {}", check.kind(), check.name(), timestamp()),
        )?;

        let start = Instant::now();
        match check.execute() {
            Ok(()) => {
                self.sink
                    .write_line(Severity::Success, &format!("\t\t{CHECK_PASSED_MESSAGE}"))?;
                tracing::debug!(name = check.name(), kind = check.kind(), "check passed");
                Ok(CheckResult::pass(
                    check.name().to_string(),
                    check.kind().to_string(),
                    start.elapsed(),
                ))
            }
            Err(failure) => {
                self.sink
                    .write_line(Severity::Error, &format!("\tMessage: {failure}"))?;
                if let Some(cause) = failure.cause() {
                    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(&**cause);
                    while let Some(err) = current {
                        self.sink
                            .write_line(Severity::Error, &format!("\tCaused by: {err}"))?;
                        current = err.source();
                    }
                }
                tracing::debug!(name = check.name(), kind = check.kind(), %failure, "check failed");
                Ok(CheckResult::fail(
                    check.name().to_string(),
                    check.kind().to_string(),
                    failure.to_string(),
                    start.elapsed(),
                ))
            }
        }
    }

    fn write_totals(&mut self, summary: &RunSummary) -> crate::Result<()> {
        // Passed/failed counts right-aligned to the width of the total
        let width = summary.total.to_string().len();
        self.sink
            .write_line(Severity::Info, &format!("Tests Run:    {}", summary.total))?;
        self.sink.write_line(
            Severity::Info,
            &format!("Tests Passed: {:>width$}", summary.passed),
        )?;
        self.sink.write_line(
            Severity::Info,
            &format!("Tests Failed: {:>width$}", summary.failed),
        )?;

        if summary.all_passed() {
            self.sink
                .write_line(Severity::Success, "Smoke test passed successfully")?;
        } else {
            self.sink.write_line(Severity::Error, "SMOKE TEST FAILED!")?;
        }
        Ok(())
    }
}
