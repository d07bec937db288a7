use crate::cli::{
    actions::{Action, server::Args},
    commands,
};
use anyhow::{Context, Result};

/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches
        .get_one::<u16>(commands::ARG_PORT)
        .copied()
        .context("missing required argument: --port")?;

    let log_format = matches
        .get_one::<crate::cli::telemetry::LogFormat>(commands::logging::ARG_LOG_FORMAT)
        .copied()
        .unwrap_or_default();

    Ok(Action::Server(Args { port, log_format }))
}
