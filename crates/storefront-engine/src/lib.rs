// Engine - catalog view logic between decoded products (types) and the
// terminal presentation (cli). Nothing in here performs I/O.

pub mod catalog;
pub mod chart;
pub mod controls;
pub mod error;
pub mod filter_sort;

pub use catalog::{CatalogState, LoadPhase};
pub use chart::{
    BarOrientation, ChartConfig, ChartDataset, ChartHandle, ChartPresenter, DrawingSurface,
    SERIES_LABEL,
};
pub use controls::{ControlFocus, FilterControls};
pub use error::{Error, Result};
pub use filter_sort::FilterSortEngine;
