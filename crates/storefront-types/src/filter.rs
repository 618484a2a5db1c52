use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Categories offered by the selector before any catalog data has arrived.
pub const KNOWN_CATEGORIES: [&str; 4] = [
    "men's clothing",
    "women's clothing",
    "jewelery",
    "electronics",
];

/// Category selection: every product, or exactly one category value.
///
/// Matching is case-sensitive and performs no normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub const ALL: &'static str = "all";

    pub fn only(category: impl Into<String>) -> Self {
        CategoryFilter::Only(category.into())
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL,
            CategoryFilter::Only(category) => category,
        }
    }

    /// Human readable option text, e.g. `Men's Clothing`
    pub fn label(&self) -> String {
        self.as_str()
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == Self::ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        if s == Self::ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => CategoryFilter::ALL.to_string(),
            CategoryFilter::Only(category) => category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CategoryFilter::from(s))
    }
}

/// Ordering applied after filtering.
///
/// `None` keeps the filtered order untouched and is the initial selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    TitleAsc,
    TitleDesc,
    #[default]
    None,
}

impl SortKey {
    /// Options offered by the sort selector, in display order.
    pub const OPTIONS: [SortKey; 4] = [
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
            SortKey::None => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "Price (Low to High)",
            SortKey::PriceDesc => "Price (High to Low)",
            SortKey::TitleAsc => "Title (A to Z)",
            SortKey::TitleDesc => "Title (Z to A)",
            SortKey::None => "Unsorted",
        }
    }

    /// Any value outside the known keys means "no reordering".
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(SortKey::None)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "title-asc" => Ok(SortKey::TitleAsc),
            "title-desc" => Ok(SortKey::TitleDesc),
            "none" => Ok(SortKey::None),
            other => Err(Error::UnknownSortKey(other.to_string())),
        }
    }
}
