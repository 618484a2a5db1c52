use super::common::SelectionArgs;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive dashboard (default)")]
    Dashboard {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    #[command(about = "Fetch the catalog once and print the filtered, sorted list")]
    List {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    #[command(about = "List the category options offered by the dashboard")]
    Categories {
        #[arg(long, help = "Skip the fetch and show only the built-in options")]
        offline: bool,
    },

    #[command(about = "Inspect or create the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a default config file")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
