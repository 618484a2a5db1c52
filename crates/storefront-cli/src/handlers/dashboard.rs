//! Dashboard handler
//!
//! Starts the single catalog fetch on a tokio worker and hands the terminal to
//! [`TuiRenderer`]. The outcome travels back over a channel; once the UI has
//! exited the receiver is gone and a late outcome is dropped.

use std::sync::mpsc::{self, Sender};

use anyhow::Result;
use storefront_engine::CatalogState;
use storefront_runtime::{Config, HttpProductSource, ProductSource, fetch_once};

use super::initial_state;
use crate::args::SelectionArgs;
use crate::presentation::{DashboardApp, TuiEvent, TuiRenderer};

pub fn handle(config: &Config, selection: &SelectionArgs) -> Result<()> {
    let state = initial_state(config, selection)?;
    let source = HttpProductSource::from_config(config)?;
    run_dashboard(source, state)
}

pub fn run_dashboard<S: ProductSource>(source: S, state: CatalogState) -> Result<()> {
    let app = DashboardApp::new(state, source.describe())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let (tx, rx) = mpsc::channel();
    runtime.spawn(fetch_and_deliver(source, tx));

    let result = TuiRenderer::new(app).run(rx);

    // An unfinished fetch must not hold up exit.
    runtime.shutdown_background();
    result
}

/// Returns whether the outcome reached the dashboard.
pub(crate) async fn fetch_and_deliver<S: ProductSource>(source: S, tx: Sender<TuiEvent>) -> bool {
    let outcome = fetch_once(&source).await;
    if tx.send(TuiEvent::Catalog(Box::new(outcome))).is_err() {
        tracing::debug!("dashboard closed before the catalog arrived; outcome discarded");
        return false;
    }
    true
}
