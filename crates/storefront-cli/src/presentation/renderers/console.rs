use std::path::Path;

use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;
use storefront_runtime::Config;

use crate::args::OutputFormat;
use crate::presentation::view_models::{CategoryListViewModel, ProductListViewModel};
use crate::presentation::views::{CategoryListView, ProductListView};

/// Writes command results to stdout as text or JSON.
pub struct ConsoleRenderer {
    format: OutputFormat,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render_product_list(&self, model: &ProductListViewModel) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.render_json(model),
            OutputFormat::Plain => {
                let stdout = std::io::stdout();
                let interactive = stdout.is_terminal();
                let width = if interactive {
                    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
                } else {
                    None
                };
                print!(
                    "{}",
                    ProductListView::new(model)
                        .with_width(width)
                        .with_color(interactive)
                );
                Ok(())
            }
        }
    }

    pub fn render_categories(&self, model: &CategoryListViewModel) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.render_json(model),
            OutputFormat::Plain => {
                print!("{}", CategoryListView::new(model));
                Ok(())
            }
        }
    }

    pub fn render_config(&self, config: &Config, path: &Path) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.render_json(config),
            OutputFormat::Plain => {
                let origin = if path.exists() { "" } else { " (not found, defaults)" };
                println!("# {}{}", path.display(), origin);
                print!("{}", config.to_toml()?);
                Ok(())
            }
        }
    }

    pub fn render_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
