//! Testing infrastructure for storefront tests.
//!
//! This crate provides:
//! - `fixtures`: a small catalog in the shape served by the products API
//! - `source`: an in-memory `ProductSource` with call counting and gating
//! - `server`: a canned HTTP responder for exercising the real HTTP source

pub mod fixtures;
pub mod server;
pub mod source;

pub use fixtures::{CATALOG_JSON, product, sample_catalog};
pub use server::CannedServer;
pub use source::FixtureSource;
