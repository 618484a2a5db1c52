use anyhow::{Result, bail};
use storefront_engine::CatalogState;
use storefront_runtime::{Config, HttpProductSource, ProductSource, fetch_once};

use super::initial_state;
use crate::args::{OutputFormat, SelectionArgs};
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_product_list;

pub fn handle(config: &Config, selection: &SelectionArgs, format: OutputFormat) -> Result<()> {
    let state = initial_state(config, selection)?;
    let source = HttpProductSource::from_config(config)?;
    let state = load_catalog(&source, state)?;

    ConsoleRenderer::new(format).render_product_list(&present_product_list(&state))
}

/// Fetch once and resolve `state`. A failed fetch becomes the command's error.
pub(crate) fn load_catalog<S: ProductSource>(source: &S, mut state: CatalogState) -> Result<CatalogState> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(fetch_once(source));
    outcome.apply_to(&mut state)?;

    if let Some(message) = state.error() {
        bail!("{}", message);
    }
    Ok(state)
}
