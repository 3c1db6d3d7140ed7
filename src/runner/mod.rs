pub mod executor;
pub mod types;

pub use executor::SuiteRunner;
pub use types::{CheckResult, RunSummary};
