use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::LogLevel;

/// Where log lines go for the current command.
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// The dashboard owns the terminal; nothing may write to it.
    Off,
}

/// `STOREFRONT_LOG` takes precedence over `--log-level` when set.
pub fn init(level: LogLevel, target: LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_env("STOREFRONT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init();
        }
    }

    Ok(())
}
