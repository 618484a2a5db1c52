//! Presenters turn engine state into view models. No formatting happens here.

mod catalog;
mod dashboard;

pub use catalog::{present_categories, present_product_list};
pub use dashboard::{DASHBOARD_TITLE, DashboardInput, FetchStamp, present_dashboard};
