use crate::{api, cli::telemetry::LogFormat};
use anyhow::Result;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub log_format: LogFormat,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the listener cannot be bound or the server stops abnormally.
pub async fn execute(args: Args) -> Result<()> {
    log_startup_args(&args);

    api::new(args.port).await
}

fn log_startup_args(args: &Args) {
    let entries = [
        ("listen", format!("tcp:[::]:{}", args.port)),
        ("base_url", format!("http://localhost:{}", args.port)),
        ("log_format", args.log_format.to_string()),
    ];
    info!("{}", startup_message("Startup configuration", &entries));
}

fn startup_message(title: &str, entries: &[(&str, String)]) -> String {
    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut message = format!("{}\n\n{title}:", glmock_banner());
    for (key, value) in entries {
        let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
        let _ =
            std::fmt::Write::write_fmt(&mut message, format_args!("\n  {key}:{padding} {value}"));
    }
    message
}

fn glmock_banner() -> String {
    let short_hash = short_commit(crate::GIT_COMMIT_HASH);
    GLMOCK_BANNER.replace(
        "{VERSION}",
        &format!(" - {} - {}", env!("CARGO_PKG_VERSION"), short_hash),
    )
}

fn short_commit(hash: &str) -> String {
    let trimmed = hash.trim();
    if trimmed.len() > 7 {
        trimmed[..7].to_string()
    } else {
        trimmed.to_string()
    }
}

const GLMOCK_BANNER: &str = r"
   __ _| |_ __ ___   ___   ___| | __
  / _` | | '_ ` _ \ / _ \ / __| |/ /
 | (_| | | | | | | | (_) | (__|   <
  \__, |_|_| |_| |_|\___/ \___|_|\_\
  |___/  {VERSION}";
