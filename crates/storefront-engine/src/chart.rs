//! Chart presentation
//!
//! Turns the derived product list into a single-series bar chart dataset and
//! guards the drawing surface the chart is drawn on.
//!
//! A [`DrawingSurface`] hands out at most one live [`ChartHandle`]. The handle
//! releases the surface when dropped, and [`ChartPresenter`] always drops its
//! current handle before acquiring a replacement.

use std::cell::Cell;
use std::rc::Rc;

use storefront_types::Product;

use crate::{CatalogState, Error, Result};

pub const SERIES_LABEL: &str = "Price";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarOrientation {
    Horizontal,
    Vertical,
}

/// Fixed chart configuration; not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    pub orientation: BarOrientation,
    pub begin_at_zero: bool,
    pub legend: bool,
    pub tooltip: bool,
}

impl ChartConfig {
    pub const FIXED: ChartConfig = ChartConfig {
        orientation: BarOrientation::Horizontal,
        begin_at_zero: true,
        legend: true,
        tooltip: true,
    };
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::FIXED
    }
}

/// Labels and values of the "Price" series, index aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    series_label: String,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl ChartDataset {
    pub fn from_products(products: &[Product]) -> Self {
        Self {
            series_label: SERIES_LABEL.to_string(),
            labels: products.iter().map(|p| p.title.clone()).collect(),
            values: products.iter().map(|p| p.price).collect(),
        }
    }

    pub fn series_label(&self) -> &str {
        &self.series_label
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn bar(&self, index: usize) -> Option<(&str, f64)> {
        Some((self.labels.get(index)?.as_str(), *self.values.get(index)?))
    }

    pub fn bars(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Upper bound of the value axis. The axis always starts at zero.
    pub fn axis_max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

impl Default for ChartDataset {
    fn default() -> Self {
        Self::from_products(&[])
    }
}

#[derive(Debug)]
struct SurfaceSlot {
    name: String,
    live: Cell<Option<u64>>,
    next_id: Cell<u64>,
}

/// Rendering target shared between the presenter and its handles.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    slot: Rc<SurfaceSlot>,
}

impl DrawingSurface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(SurfaceSlot {
                name: name.into(),
                live: Cell::new(None),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.slot.name
    }

    pub fn live_chart(&self) -> Option<u64> {
        self.slot.live.get()
    }

    pub fn is_in_use(&self) -> bool {
        self.slot.live.get().is_some()
    }

    /// Claim the surface for a new chart.
    ///
    /// Fails with [`Error::SurfaceInUse`] while another handle is alive.
    pub fn acquire(&self) -> Result<ChartHandle> {
        if let Some(chart_id) = self.slot.live.get() {
            return Err(Error::SurfaceInUse {
                surface: self.slot.name.clone(),
                chart_id,
            });
        }

        let id = self.slot.next_id.get();
        self.slot.next_id.set(id + 1);
        self.slot.live.set(Some(id));
        tracing::debug!(surface = %self.slot.name, chart_id = id, "chart handle acquired");

        Ok(ChartHandle {
            id,
            slot: Rc::clone(&self.slot),
        })
    }
}

/// Live claim on a drawing surface; released on drop.
#[derive(Debug)]
pub struct ChartHandle {
    id: u64,
    slot: Rc<SurfaceSlot>,
}

impl ChartHandle {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        if self.slot.live.get() == Some(self.id) {
            self.slot.live.set(None);
        }
        tracing::debug!(surface = %self.slot.name, chart_id = self.id, "chart handle released");
    }
}

#[derive(Debug)]
pub struct ChartPresenter {
    surface: DrawingSurface,
    handle: Option<ChartHandle>,
    dataset: ChartDataset,
    presented_revision: Option<u64>,
}

impl ChartPresenter {
    pub fn new(surface: DrawingSurface) -> Self {
        Self {
            surface,
            handle: None,
            dataset: ChartDataset::default(),
            presented_revision: None,
        }
    }

    pub fn config(&self) -> ChartConfig {
        ChartConfig::FIXED
    }

    pub fn dataset(&self) -> &ChartDataset {
        &self.dataset
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn chart_id(&self) -> Option<u64> {
        self.handle.as_ref().map(ChartHandle::id)
    }

    /// Replace the chart with one built from `products`.
    pub fn present(&mut self, products: &[Product]) -> Result<&ChartDataset> {
        // Release before re-acquiring on the same surface
        self.handle = None;
        let handle = self.surface.acquire()?;
        self.dataset = ChartDataset::from_products(products);
        self.handle = Some(handle);
        Ok(&self.dataset)
    }

    /// Re-present only when the state's derived list changed since the last
    /// call. Returns whether a new chart was created.
    pub fn sync(&mut self, state: &CatalogState) -> Result<bool> {
        if self.presented_revision == Some(state.revision()) {
            return Ok(false);
        }
        self.present(state.derived())?;
        self.presented_revision = Some(state.revision());
        Ok(true)
    }

    /// Release the surface and forget the dataset.
    pub fn teardown(&mut self) {
        self.handle = None;
        self.dataset = ChartDataset::default();
        self.presented_revision = None;
    }
}
