pub mod catalog;
pub mod dashboard;

pub use catalog::*;
pub use dashboard::*;
