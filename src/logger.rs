use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system.
///
/// The level is controlled through the RUST_LOG environment variable,
/// default: warn (report lines go through the sink, not the logger).
///
/// Examples:
/// - RUST_LOG=debug rusmoke run suite.json
/// - RUST_LOG=trace rusmoke run suite.json
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
