//! Catalog view state
//!
//! Owns the fetched catalog and the derived list shown by the dashboard.
//!
//! ## Transitions:
//! - `Loading -> Ready` once, when the fetch succeeds (seeds raw and derived)
//! - `Loading -> Failed` once, when the fetch fails (raw and derived stay empty)
//! - Category/sort changes recompute derived synchronously in every phase
//!
//! `derived` is only ever written by [`CatalogState::recompute`], so it always
//! equals `FilterSortEngine::apply(raw, category, sort)`.

use storefront_types::{CategoryFilter, Product, SortKey};

use crate::{Error, FilterSortEngine, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed { message: String },
}

impl LoadPhase {
    pub fn name(&self) -> &'static str {
        match self {
            LoadPhase::Loading => "loading",
            LoadPhase::Ready => "ready",
            LoadPhase::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug)]
pub struct CatalogState {
    engine: FilterSortEngine,
    raw: Vec<Product>,
    derived: Vec<Product>,
    category: CategoryFilter,
    sort: SortKey,
    phase: LoadPhase,
    revision: u64,
}

impl CatalogState {
    pub fn new(engine: FilterSortEngine) -> Self {
        Self {
            engine,
            raw: Vec::new(),
            derived: Vec::new(),
            category: CategoryFilter::All,
            sort: SortKey::None,
            phase: LoadPhase::Loading,
            revision: 0,
        }
    }

    /// Start with a non-default selection (e.g. from config or flags).
    pub fn with_selection(mut self, category: CategoryFilter, sort: SortKey) -> Self {
        self.category = category;
        self.sort = sort;
        self.recompute();
        self
    }

    pub fn raw(&self) -> &[Product] {
        &self.raw
    }

    pub fn derived(&self) -> &[Product] {
        &self.derived
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Bumped every time `derived` is replaced.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn engine(&self) -> &FilterSortEngine {
        &self.engine
    }

    /// Apply a successful fetch. Rejected once the load has resolved.
    pub fn load_succeeded(&mut self, products: Vec<Product>) -> Result<()> {
        self.ensure_loading()?;
        tracing::debug!(count = products.len(), "catalog loaded");
        self.raw = products;
        self.phase = LoadPhase::Ready;
        self.recompute();
        Ok(())
    }

    /// Apply a failed fetch. Rejected once the load has resolved.
    pub fn load_failed(&mut self, message: impl Into<String>) -> Result<()> {
        self.ensure_loading()?;
        let message = message.into();
        tracing::debug!(%message, "catalog load failed");
        self.phase = LoadPhase::Failed { message };
        Ok(())
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        if self.category == category {
            return;
        }
        self.category = category;
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        if self.sort == sort {
            return;
        }
        self.sort = sort;
        self.recompute();
    }

    fn ensure_loading(&self) -> Result<()> {
        if self.is_loading() {
            Ok(())
        } else {
            Err(Error::AlreadyResolved(self.phase.name()))
        }
    }

    fn recompute(&mut self) {
        self.derived = self.engine.apply(&self.raw, &self.category, self.sort);
        self.revision += 1;
        tracing::trace!(
            category = %self.category,
            sort = %self.sort,
            shown = self.derived.len(),
            revision = self.revision,
            "derived list recomputed"
        );
    }
}
