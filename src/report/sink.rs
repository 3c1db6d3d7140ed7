use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;
use fs2::FileExt;

/// Structured severity of one report line; each sink decides its rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Line-oriented destination for the runner's progress and result lines.
///
/// The runner is the only writer, one call at a time, in program order.
pub trait ReportSink {
    fn write_line(&mut self, severity: Severity, line: &str) -> std::io::Result<()>;
}

/// Interactive console sink: success lines green, error lines red.
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn write_line(&mut self, severity: Severity, line: &str) -> std::io::Result<()> {
        match severity {
            Severity::Info => println!("{}", line),
            Severity::Success => println!("{}", line.green()),
            Severity::Error => println!("{}", line.red()),
        }
        Ok(())
    }
}

/// Append-only plain-text sink.
///
/// The file is opened, locked, written and closed per line so an interrupted
/// run leaves every line written so far on disk.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for FileSink {
    fn write_line(&mut self, _severity: Severity, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.lock_exclusive()?;
        writeln!(file, "{}", line)?;
        // Unlock happens when the handle is dropped, closing the file
        drop(file);
        Ok(())
    }
}
