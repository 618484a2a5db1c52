pub mod error;
pub mod filter;
pub mod product;

pub use error::{Error, Result};
pub use filter::*;
pub use product::*;
