use super::args::{Cli, Commands, ConfigCommand, SelectionArgs};
use super::handlers;
use super::logging::{self, LogTarget};
use anyhow::Result;
use storefront_runtime::{Config, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Dashboard {
        selection: SelectionArgs::default(),
    });

    // `config init` must work even when the existing file does not parse.
    if let Commands::Config {
        command: ConfigCommand::Init { force },
    } = command
    {
        logging::init(cli.log_level, LogTarget::Stderr)?;
        return handlers::config::init(&config_path, force);
    }

    let mut config = Config::load_from(&config_path)?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(locale) = cli.locale {
        config.locale = Some(locale);
    }
    config.validate()?;

    match command {
        Commands::Dashboard { selection } => {
            let target = match config.log_file.as_deref() {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Off,
            };
            logging::init(cli.log_level, target)?;
            handlers::dashboard::handle(&config, &selection)
        }

        Commands::List { selection } => {
            logging::init(cli.log_level, LogTarget::Stderr)?;
            handlers::list::handle(&config, &selection, cli.format)
        }

        Commands::Categories { offline } => {
            logging::init(cli.log_level, LogTarget::Stderr)?;
            handlers::categories::handle(&config, offline, cli.format)
        }

        Commands::Config { command } => {
            logging::init(cli.log_level, LogTarget::Stderr)?;
            match command {
                ConfigCommand::Show => handlers::config::show(&config, &config_path, cli.format),
                ConfigCommand::Init { force } => handlers::config::init(&config_path, force),
            }
        }
    }
}
