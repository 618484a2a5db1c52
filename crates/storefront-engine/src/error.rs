use std::fmt;

/// Result type for storefront-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Locale tag could not be parsed
    InvalidLocale(String),

    /// Collation data could not be loaded for the locale
    Collator(String),

    /// The catalog fetch outcome was already applied
    AlreadyResolved(&'static str),

    /// The drawing surface still holds a live chart
    SurfaceInUse { surface: String, chart_id: u64 },

    /// Value outside a selector's option set
    UnknownOption(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLocale(tag) => write!(f, "Invalid locale: {}", tag),
            Error::Collator(msg) => write!(f, "Collator error: {}", msg),
            Error::AlreadyResolved(phase) => {
                write!(f, "Catalog load already resolved (phase: {})", phase)
            }
            Error::SurfaceInUse { surface, chart_id } => write!(
                f,
                "Drawing surface '{}' is already in use by chart {}; release it before reuse",
                surface, chart_id
            ),
            Error::UnknownOption(value) => write!(f, "Not a selector option: {}", value),
        }
    }
}

impl std::error::Error for Error {}
