pub mod catalog;
pub mod tui;

pub use catalog::{CategoryListView, ProductListView};
