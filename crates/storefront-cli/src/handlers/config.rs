use std::path::Path;

use anyhow::{Result, bail};
use storefront_runtime::Config;

use crate::args::OutputFormat;
use crate::presentation::ConsoleRenderer;

pub fn show(config: &Config, path: &Path, format: OutputFormat) -> Result<()> {
    ConsoleRenderer::new(format).render_config(config, path)
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    tracing::info!(path = %path.display(), "default config written");
    println!("Wrote default config to {}", path.display());
    Ok(())
}
