pub mod text;

pub use text::{format_elapsed, format_price, truncate};
