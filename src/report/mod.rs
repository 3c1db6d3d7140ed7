pub mod sink;

pub use sink::{ConsoleSink, FileSink, ReportSink, Severity};
