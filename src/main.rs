mod cli;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    rusmoke::logger::init_logger();

    let cli = cli::Cli::parse();
    ExitCode::from(cli::run(cli))
}
