pub mod config;
pub mod error;
pub mod source;

pub use config::{Config, DEFAULT_ENDPOINT, DashboardConfig, resolve_config_path};
pub use error::{Error, FetchError, Result};
pub use source::{FetchOutcome, HttpProductSource, ProductSource, fetch_once};
