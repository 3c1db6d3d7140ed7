pub mod document;
pub mod types;

pub use document::SuiteDocument;
pub use types::TestSuite;
