use serde::Serialize;

use super::OptionViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct ProductListViewModel {
    pub category: String,
    pub sort: String,
    pub total: usize,
    pub products: Vec<ProductRowViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRowViewModel {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListViewModel {
    /// Whether the options include categories read from the catalog.
    pub fetched: bool,
    pub options: Vec<OptionViewModel>,
}
