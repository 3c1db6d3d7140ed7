use std::path::Path;

use rusmoke::check::{EnvVarCheck, FileChecksumCheck, FileExistsCheck, builtin_registry};
use rusmoke::report::FileSink;
use rusmoke::runner::SuiteRunner;
use rusmoke::suite::TestSuite;
use tempfile::TempDir;

// SHA-256 of b"deployed"
const DEPLOYED_SHA256: &str = "c1fa83ed9f3b817e225d7994e58324f4e7da3e260281dfc89bc2ff16953c4304";

fn write_fixture(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let present = dir.join("artifact.bin");
    std::fs::write(&present, b"deployed").unwrap();
    let absent = dir.join("never-deployed.bin");
    (present, absent)
}

#[test]
fn saved_suite_runs_end_to_end_with_file_report() {
    let temp_dir = TempDir::new().unwrap();
    let (present, absent) = write_fixture(temp_dir.path());

    let mut suite = TestSuite::new();
    suite.add_check(Box::new(FileExistsCheck {
        name: "artifact deployed".to_string(),
        path: present.clone(),
    }));
    suite.add_check(Box::new(FileChecksumCheck {
        name: "artifact unmodified".to_string(),
        path: present,
        sha256: DEPLOYED_SHA256.to_string(),
    }));
    suite.add_check(Box::new(FileExistsCheck {
        name: "missing artifact".to_string(),
        path: absent,
    }));

    // Persist, reload, then run the reloaded suite
    let suite_path = temp_dir.path().join("deploy-smoke.json");
    suite.save(&suite_path).unwrap();
    let loaded = TestSuite::load(&suite_path).unwrap();
    assert_eq!(loaded.records().unwrap(), suite.records().unwrap());

    let report_path = temp_dir.path().join("report.txt");
    let mut sink = FileSink::new(report_path.clone());
    let mut runner = SuiteRunner::new(&mut sink);
    let summary = runner.run(&loaded).unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 1);
    assert!(!summary.all_passed());

    let report = std::fs::read_to_string(&report_path).unwrap();

    // Report order matches suite order
    let first = report.find("artifact deployed").unwrap();
    let second = report.find("artifact unmodified").unwrap();
    let third = report.find("missing artifact").unwrap();
    assert!(first < second && second < third);

    assert!(report.contains("Running Tests:"));
    assert!(report.contains("Completed Tests:"));
    assert!(report.contains("OK!"));
    assert!(report.contains("Message: file does not exist"));
    assert!(report.contains("Tests Run:    3"));
    assert!(report.contains("Tests Passed: 2"));
    assert!(report.contains("Tests Failed: 1"));
    assert!(report.contains("SMOKE TEST FAILED!"));
}

#[test]
fn passing_suite_reports_success_verdict() {
    let temp_dir = TempDir::new().unwrap();
    let (present, _) = write_fixture(temp_dir.path());

    unsafe { std::env::set_var("RUSMOKE_E2E_ENV", "production") };

    let mut suite = TestSuite::new();
    suite.add_check(Box::new(FileExistsCheck {
        name: "artifact deployed".to_string(),
        path: present,
    }));
    suite.add_check(Box::new(EnvVarCheck {
        name: "environment set".to_string(),
        variable: "RUSMOKE_E2E_ENV".to_string(),
        expected: Some("production".to_string()),
    }));

    let report_path = temp_dir.path().join("report.txt");
    let mut sink = FileSink::new(report_path.clone());
    let summary = SuiteRunner::new(&mut sink).run(&suite).unwrap();

    assert!(summary.all_passed());
    assert_eq!(summary.passed + summary.failed, summary.total);

    let report = std::fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("Smoke test passed successfully"));
    assert!(!report.contains("SMOKE TEST FAILED!"));
}

#[test]
fn example_suite_saves_loads_and_covers_every_kind() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("template.json");

    let registry = builtin_registry();
    let mut suite = TestSuite::with_example_data(registry);
    suite.save(&path).unwrap();

    let loaded = TestSuite::load(&path).unwrap();
    assert_eq!(loaded.records().unwrap(), suite.records().unwrap());

    let kinds: Vec<_> = loaded.checks.iter().map(|c| c.kind()).collect();
    for kind in registry.kinds() {
        assert!(kinds.contains(&kind), "example suite misses kind {kind}");
    }
}

#[test]
fn empty_suite_document_runs_as_noop() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.json");
    std::fs::write(&path, r#"{"tests": []}"#).unwrap();

    let suite = TestSuite::load(&path).unwrap();
    assert!(suite.is_empty());

    let report_path = temp_dir.path().join("report.txt");
    let mut sink = FileSink::new(report_path);
    let summary = SuiteRunner::new(&mut sink).run(&suite).unwrap();

    assert_eq!(summary.total, 0);
    assert_eq!(summary.passed, 0);
    assert_eq!(summary.failed, 0);
    assert!(summary.all_passed());
}
