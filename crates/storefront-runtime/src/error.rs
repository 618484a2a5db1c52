use std::fmt;

/// Result type for storefront-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client could not be constructed
    Client(reqwest::Error),

    /// Engine layer error
    Engine(storefront_engine::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Client(err) => write!(f, "HTTP client error: {}", err),
            Error::Engine(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Client(err) => Some(err),
            Error::Engine(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<storefront_engine::Error> for Error {
    fn from(err: storefront_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// The single failure surfaced by a catalog fetch.
///
/// Network errors, HTTP error statuses and decode errors all collapse into
/// this; the underlying cause is kept for logging only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    cause: String,
}

impl FetchError {
    pub const MESSAGE: &'static str = "Failed to fetch products";

    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    /// User-facing message, identical for every cause.
    pub fn message(&self) -> &'static str {
        Self::MESSAGE
    }

    pub fn cause(&self) -> &str {
        &self.cause
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::MESSAGE)
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::new(err.to_string())
    }
}
