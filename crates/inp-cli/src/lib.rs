#![deny(missing_docs)]

//! Command line front end: configuration loading, logging setup and the
//! `inp` subcommands.

pub mod commands;
pub mod config;

use inp_core::errors::InpError;
use tracing_subscriber::EnvFilter;

/// Installs the `fmt` subscriber on stderr.
///
/// `RUST_LOG` takes precedence; otherwise `info` when `verbose` and `warn`
/// when not.
pub fn init_logging(verbose: bool) -> Result<(), InpError> {
    let fallback = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| InpError::serde("logging-init", err.to_string()))
}
