pub mod categories;
pub mod config;
pub mod dashboard;
pub mod list;

use anyhow::Result;
use storefront_engine::{CatalogState, FilterSortEngine};
use storefront_runtime::Config;

use crate::args::SelectionArgs;

/// Fresh catalog state with the run's initial selection.
pub(crate) fn initial_state(config: &Config, selection: &SelectionArgs) -> Result<CatalogState> {
    let engine = FilterSortEngine::new(config.locale.as_deref())?;
    let (category, sort) = selection.resolve(
        &config.dashboard.default_category,
        config.dashboard.default_sort,
    );
    Ok(CatalogState::new(engine).with_selection(category, sort))
}
