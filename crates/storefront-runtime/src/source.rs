//! Catalog sources
//!
//! A [`ProductSource`] performs one read of the whole catalog per call. There
//! is no retry, no pagination and no caching; callers decide what to do with
//! the single [`FetchOutcome`].

use std::future::Future;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use storefront_engine::CatalogState;
use storefront_types::Product;

use crate::{Config, Error, FetchError, Result};

pub trait ProductSource: Send + Sync + 'static {
    /// Where the catalog is read from, for logs and status lines.
    fn describe(&self) -> String;

    fn fetch_products(
        &self,
    ) -> impl Future<Output = std::result::Result<Vec<Product>, FetchError>> + Send;
}

/// Reads the catalog from `GET {endpoint}/products`.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: reqwest::Client,
    url: String,
}

impl HttpProductSource {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(Error::Client)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.products_url(), config.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn get_catalog(&self) -> std::result::Result<Vec<Product>, reqwest::Error> {
        let response = self.client.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        response.json::<Vec<Product>>().await
    }
}

impl ProductSource for HttpProductSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_products(&self) -> std::result::Result<Vec<Product>, FetchError> {
        self.get_catalog().await.map_err(FetchError::from)
    }
}

/// Result of a single catalog read, stamped with when it completed.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub result: std::result::Result<Vec<Product>, FetchError>,
    pub fetched_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Resolve the catalog state's load with this outcome.
    pub fn apply_to(self, state: &mut CatalogState) -> Result<()> {
        match self.result {
            Ok(products) => state.load_succeeded(products)?,
            Err(err) => state.load_failed(err.message())?,
        }
        Ok(())
    }
}

/// Perform exactly one fetch against `source`, logging the outcome.
pub async fn fetch_once<S: ProductSource>(source: &S) -> FetchOutcome {
    let target = source.describe();
    tracing::info!(%target, "fetching catalog");

    let started = Instant::now();
    let result = source.fetch_products().await;
    let elapsed = started.elapsed();

    match &result {
        Ok(products) => tracing::info!(
            %target,
            count = products.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "catalog fetched"
        ),
        Err(err) => tracing::warn!(
            %target,
            cause = err.cause(),
            elapsed_ms = elapsed.as_millis() as u64,
            "catalog fetch failed"
        ),
    }

    FetchOutcome {
        result,
        fetched_at: Utc::now(),
        elapsed,
    }
}
