use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use storefront_runtime::{FetchError, ProductSource};
use storefront_types::Product;
use tokio::sync::Notify;

/// In-memory `ProductSource` returning a preset outcome.
///
/// A gated source holds every fetch until [`FixtureSource::release`] is
/// called, which lets tests tear a view down while the fetch is in flight.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    result: Result<Vec<Product>, FetchError>,
    gate: Option<Arc<Notify>>,
    calls: Arc<AtomicUsize>,
}

impl FixtureSource {
    pub fn ok(products: Vec<Product>) -> Self {
        Self {
            result: Ok(products),
            gate: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(cause: &str) -> Self {
        Self {
            result: Err(FetchError::new(cause)),
            gate: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    /// Let a gated fetch complete.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Number of fetches started so far, across clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProductSource for FixtureSource {
    fn describe(&self) -> String {
        "fixture".to_string()
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.result.clone()
    }
}
