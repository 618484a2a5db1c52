use anyhow::Result;
use storefront_engine::FilterControls;
use storefront_runtime::{Config, HttpProductSource, ProductSource, fetch_once};

use crate::args::OutputFormat;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_categories;

pub fn handle(config: &Config, offline: bool, format: OutputFormat) -> Result<()> {
    let mut controls = FilterControls::new();

    let fetched = if offline {
        false
    } else {
        let source = HttpProductSource::from_config(config)?;
        collect_categories(&source, &mut controls)?
    };

    ConsoleRenderer::new(format).render_categories(&present_categories(&controls, fetched))
}

/// Extend `controls` with the catalog's categories. A failed fetch leaves the
/// built-in options in place and is only logged.
pub(crate) fn collect_categories<S: ProductSource>(
    source: &S,
    controls: &mut FilterControls,
) -> Result<bool> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(fetch_once(source));

    match outcome.result {
        Ok(products) => {
            controls.extend_categories(&products);
            Ok(true)
        }
        Err(err) => {
            tracing::warn!(cause = err.cause(), "{}; showing built-in categories", err);
            Ok(false)
        }
    }
}
