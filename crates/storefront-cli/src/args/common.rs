use clap::Args;
use storefront_types::{CategoryFilter, SortKey};

use super::enums::SortArg;

#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    #[arg(long, help = "Category to show ('all' or an exact category value)")]
    pub category: Option<String>,

    #[arg(long, help = "Initial ordering")]
    pub sort: Option<SortArg>,
}

impl SelectionArgs {
    /// Flags win over the configured defaults.
    pub fn resolve(&self, default_category: &CategoryFilter, default_sort: SortKey) -> (CategoryFilter, SortKey) {
        let category = self
            .category
            .as_deref()
            .map(CategoryFilter::from)
            .unwrap_or_else(|| default_category.clone());
        let sort = self.sort.map(SortKey::from).unwrap_or(default_sort);
        (category, sort)
    }
}
