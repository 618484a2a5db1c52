use serde::{Deserialize, Serialize};

/// A single catalog entry as served by `GET /products`.
///
/// Only `title`, `price` and `category` drive the dashboard. The remaining
/// fields are decoded when present so that `list --format json` can echo them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

impl Product {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            category: category.into(),
            description: None,
            image: None,
            rating: None,
        }
    }
}
