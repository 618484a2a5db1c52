// NOTE: storefront layering
//
// - types:   Product, CategoryFilter, SortKey (serde shapes only)
// - engine:  filter/sort, catalog view state, chart presenter, selectors (no I/O)
// - runtime: config file, HTTP source, the one-shot fetch
// - cli:     argument parsing, handlers, terminal presentation
//
// The dashboard UI loop owns all view state. The fetch runs on a tokio worker
// and reports back over a channel; nothing else crosses threads.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat, SelectionArgs, SortArg};
pub use commands::run;
