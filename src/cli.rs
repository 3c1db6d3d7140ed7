use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use inquire::{Confirm, Select, Text};

use rusmoke::check::builtin_registry;
use rusmoke::report::{ConsoleSink, FileSink, ReportSink};
use rusmoke::runner::{RunSummary, SuiteRunner};
use rusmoke::suite::TestSuite;

pub type Result<T> = std::result::Result<T, anyhow::Error>;

const SUITE_FILE_EXTENSION: &str = "json";
const ABORT_OPTION: &str = "Abort";

/// Exit status when the suite could not be loaded or run at all, reserved
/// so it never collides with a clamped failure count.
const EXIT_FATAL: u8 = 101;
const MAX_FAILURE_EXIT: u8 = 100;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the checks contained in the given suite file (the default)
    Run {
        /// Suite file; you will be prompted for one when omitted
        file: Option<PathBuf>,

        /// Append report lines to this file instead of the console
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a new suite file with an example of every check kind
    Create {
        /// Suite file to write; you will be prompted for one when omitted
        file: Option<PathBuf>,
    },
}

/// Dispatch the parsed command line, returning the process exit status.
pub fn run(cli: Cli) -> u8 {
    let command = cli.command.unwrap_or(Commands::Run {
        file: None,
        output: None,
    });

    let outcome = match command {
        Commands::Run { file, output } => run_suite(file, output),
        Commands::Create { file } => create_suite(file),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", format!("Error: {err:#}").red());
            EXIT_FATAL
        }
    }
}

fn run_suite(file: Option<PathBuf>, output: Option<PathBuf>) -> Result<u8> {
    let Some(file) = resolve_suite_path(file, true)? else {
        return Ok(0); // aborted at the chooser
    };

    let suite = TestSuite::load(&file)
        .with_context(|| format!("cannot load suite {}", file.display()))?;

    let mut sink: Box<dyn ReportSink> = match output {
        Some(path) => Box::new(FileSink::new(path)),
        None => Box::new(ConsoleSink),
    };

    let mut runner = SuiteRunner::new(sink.as_mut());
    let summary = runner.run(&suite)?;
    Ok(exit_code(&summary))
}

fn create_suite(file: Option<PathBuf>) -> Result<u8> {
    let Some(file) = resolve_suite_path(file, false)? else {
        return Ok(0);
    };

    if file.exists() {
        let overwrite = Confirm::new(&format!("Overwrite {}?", file.display()))
            .with_default(false)
            .prompt()?;
        if !overwrite {
            println!("Not overwriting.");
            return Ok(0);
        }
    }

    let mut suite = TestSuite::with_example_data(builtin_registry());
    suite
        .save(&file)
        .with_context(|| format!("cannot write suite {}", file.display()))?;
    println!("Wrote example suite to {}", file.display());
    Ok(0)
}

/// Exit status contract: 0 when every check passed, otherwise the failure
/// count (clamped so it stays distinct from the fatal sentinel).
fn exit_code(summary: &RunSummary) -> u8 {
    if summary.all_passed() {
        0
    } else {
        summary.failed.min(MAX_FAILURE_EXIT as usize) as u8
    }
}

fn resolve_suite_path(file: Option<PathBuf>, must_exist: bool) -> Result<Option<PathBuf>> {
    match file {
        Some(file) => Ok(Some(ensure_extension(file))),
        None if must_exist => choose_existing_suite(),
        None => prompt_new_suite_name(),
    }
}

/// Append the suite extension unless the path already carries it.
fn ensure_extension(path: PathBuf) -> PathBuf {
    let has_extension = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case(SUITE_FILE_EXTENSION))
        .unwrap_or(false);
    if has_extension {
        path
    } else {
        let mut raw = path.into_os_string();
        raw.push(".");
        raw.push(SUITE_FILE_EXTENSION);
        PathBuf::from(raw)
    }
}

/// Interactive chooser over the suite files in the current directory.
fn choose_existing_suite() -> Result<Option<PathBuf>> {
    let mut options = vec![ABORT_OPTION.to_string()];
    options.extend(list_suite_files(Path::new("."))?);

    if options.len() == 1 {
        anyhow::bail!("no .{SUITE_FILE_EXTENSION} suite files found in the current directory");
    }

    let choice = Select::new("Choose a suite to run:", options)
        .with_help_message("Enter to confirm, type to filter")
        .prompt()?;

    if choice == ABORT_OPTION {
        return Ok(None);
    }
    Ok(Some(PathBuf::from(choice)))
}

fn prompt_new_suite_name() -> Result<Option<PathBuf>> {
    let name = Text::new("Suite file to create:").prompt()?;
    if name.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(ensure_extension(PathBuf::from(name.trim()))))
}

fn list_suite_files(dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_suite = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case(SUITE_FILE_EXTENSION))
            .unwrap_or(false);
        if is_suite && let Some(name) = path.file_name() {
            files.push(name.to_string_lossy().into_owned());
        }
    }
    files.sort();
    Ok(files)
}
