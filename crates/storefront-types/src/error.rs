use std::fmt;

/// Result type for storefront-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sort key string outside the selector's option set
    UnknownSortKey(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSortKey(key) => write!(
                f,
                "Unknown sort key '{}' (expected price-asc, price-desc, title-asc, title-desc or none)",
                key
            ),
        }
    }
}

impl std::error::Error for Error {}
