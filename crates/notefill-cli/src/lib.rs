//! Shared startup plumbing for the workflow binaries.
//!
//! Every binary does the same three things: load `.env`, initialize
//! tracing, run one pipeline, and exit 0 on completion or 1 on any error.
//! There are no flags and no subcommands.

use tracing::error;
use tracing_subscriber::EnvFilter;

use notefill_core::{Error, Result};

/// Load `.env` and initialize the tracing subscriber.
///
/// Log level comes from `RUST_LOG`, default `info`. Output goes to stderr
/// so fatal configuration errors land on the error stream.
pub fn init() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Report a fatal error and terminate with exit code 1.
pub fn exit_with(err: Error) -> ! {
    error!(error = %err, "run failed");
    std::process::exit(1);
}

/// Run a workflow future to completion, mapping any error to exit code 1.
pub fn finish(result: Result<()>) {
    if let Err(err) = result {
        exit_with(err);
    }
}

/// Read a mandatory latitude/longitude pair from the environment.
pub fn require_home_coords() -> Result<(f64, f64)> {
    let lat = notefill_core::require_env("HOME_LAT")?;
    let lon = notefill_core::require_env("HOME_LON")?;
    let lat = lat
        .parse::<f64>()
        .map_err(|_| Error::Config(format!("HOME_LAT is not a number: {}", lat)))?;
    let lon = lon
        .parse::<f64>()
        .map_err(|_| Error::Config(format!("HOME_LON is not a number: {}", lon)))?;
    Ok((lat, lon))
}
