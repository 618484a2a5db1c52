//! Dashboard application state
//!
//! Owns the catalog state, the selectors and the chart for one dashboard
//! session. Everything here runs on the UI thread.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use storefront_engine::{CatalogState, ChartPresenter, DrawingSurface, FilterControls};
use storefront_runtime::FetchOutcome;

use crate::presentation::presenters::{DashboardInput, FetchStamp, present_dashboard};
use crate::presentation::view_models::DashboardViewModel;

/// The chart is mounted on this surface when the dashboard opens and stays
/// empty until the catalog arrives.
pub const CHART_SURFACE: &str = "price-chart";

pub struct DashboardApp {
    state: CatalogState,
    controls: FilterControls,
    chart: ChartPresenter,
    highlighted: Option<usize>,
    source: String,
    fetch: Option<FetchStamp>,
    should_quit: bool,
}

impl DashboardApp {
    pub fn new(state: CatalogState, source: impl Into<String>) -> Result<Self> {
        let mut chart = ChartPresenter::new(DrawingSurface::new(CHART_SURFACE));
        chart.sync(&state)?;

        Ok(Self {
            state,
            controls: FilterControls::new(),
            chart,
            highlighted: None,
            source: source.into(),
            fetch: None,
            should_quit: false,
        })
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    pub fn chart(&self) -> &ChartPresenter {
        &self.chart
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Resolve the pending load with the single fetch result.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> Result<()> {
        let stamp = FetchStamp {
            fetched_at: outcome.fetched_at,
            elapsed: outcome.elapsed,
        };
        outcome.apply_to(&mut self.state)?;
        self.controls.extend_categories(self.state.raw());
        self.fetch = Some(stamp);
        self.sync_chart()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.controls.toggle_focus(),
            KeyCode::Left | KeyCode::Char('h') => self.controls.step_focused(&mut self.state, -1),
            KeyCode::Right | KeyCode::Char('l') => self.controls.step_focused(&mut self.state, 1),
            KeyCode::Char('c') => self.controls.cycle_category(&mut self.state, 1),
            KeyCode::Char('C') => self.controls.cycle_category(&mut self.state, -1),
            KeyCode::Char('s') => self.controls.cycle_sort(&mut self.state, 1),
            KeyCode::Char('S') => self.controls.cycle_sort(&mut self.state, -1),
            KeyCode::Up | KeyCode::Char('k') => self.move_highlight(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_highlight(1),
            _ => {}
        }

        self.sync_chart()
    }

    pub fn view_model(&self) -> DashboardViewModel {
        present_dashboard(DashboardInput {
            state: &self.state,
            controls: &self.controls,
            chart: &self.chart,
            highlighted: self.highlighted,
            source: &self.source,
            fetch: self.fetch,
        })
    }

    pub fn teardown(&mut self) {
        self.chart.teardown();
    }

    fn move_highlight(&mut self, step: isize) {
        let len = self.chart.dataset().len();
        if len == 0 {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(index) => index.saturating_add_signed(step).min(len - 1),
        });
    }

    fn sync_chart(&mut self) -> Result<()> {
        if self.chart.sync(&self.state)? {
            let len = self.chart.dataset().len();
            self.highlighted = match self.highlighted {
                Some(_) if len == 0 => None,
                Some(index) => Some(index.min(len - 1)),
                None => None,
            };
        }
        Ok(())
    }
}
