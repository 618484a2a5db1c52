mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Chart a remote product catalog by price", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: XDG config dir)")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Catalog API base URL")]
    pub endpoint: Option<String>,

    #[arg(long, global = true, help = "Locale used to collate titles (BCP-47)")]
    pub locale: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
