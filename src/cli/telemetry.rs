use anyhow::Result;
use std::{fmt, str::FromStr};
use tracing::Level;
use tracing_subscriber::{EnvFilter, Registry, fmt as fmt_layer, layer::SubscriberExt};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid log format: {value}")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

fn env_filter(verbosity_level: Level) -> Result<EnvFilter> {
    // RUST_LOG=
    Ok(EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("tokio=error".parse()?))
}

/// Initialize logging
///
/// # Errors
///
/// Returns an error if the subscriber cannot be installed
pub fn init(verbosity_level: Option<Level>, format: LogFormat) -> Result<()> {
    let verbosity_level = verbosity_level.unwrap_or(Level::ERROR);
    let filter = env_filter(verbosity_level)?;

    match format {
        LogFormat::Pretty => {
            let layer = fmt_layer::layer()
                .with_file(false)
                .with_line_number(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_target(false)
                .pretty();

            let subscriber = Registry::default().with(layer).with(filter);
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Json => {
            let layer = fmt_layer::layer()
                .with_target(false)
                .json()
                .with_current_span(true);

            let subscriber = Registry::default().with(layer).with(filter);
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}
