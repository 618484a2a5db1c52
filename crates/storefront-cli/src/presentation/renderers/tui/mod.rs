//! TUI renderer for the dashboard
//!
//! The renderer drives the terminal and routes input to [`DashboardApp`]. The
//! catalog arrives once over the channel from the fetch task.

mod app;

pub use app::{CHART_SURFACE, DashboardApp};

use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
};
use storefront_runtime::{FetchError, FetchOutcome};

use crate::presentation::views::tui::{
    ChartView, ControlsView, HeaderView, HelpView, StatusView, TooltipView,
};

/// Events sent from the fetch task to the renderer
pub enum TuiEvent {
    Catalog(Box<FetchOutcome>),
}

pub struct TuiRenderer {
    app: DashboardApp,
}

impl TuiRenderer {
    pub fn new(app: DashboardApp) -> Self {
        Self { app }
    }

    pub fn app(&self) -> &DashboardApp {
        &self.app
    }

    pub fn run(mut self, rx: Receiver<TuiEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, &rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        self.app.teardown();
        result
    }

    fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        rx: &Receiver<TuiEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.app.handle_key(key)?;
            }

            self.poll_channel(rx)?;

            if self.app.should_quit() {
                break;
            }
        }

        Ok(())
    }

    /// Apply a delivered outcome, if any. A sender that vanished without
    /// delivering resolves the load as failed.
    pub(crate) fn poll_channel(&mut self, rx: &Receiver<TuiEvent>) -> Result<()> {
        match rx.try_recv() {
            Ok(TuiEvent::Catalog(outcome)) => self.app.apply_outcome(*outcome),
            Err(TryRecvError::Empty) => Ok(()),
            Err(TryRecvError::Disconnected) => {
                if !self.app.state().is_loading() {
                    return Ok(());
                }
                tracing::warn!("fetch task ended without delivering a result");
                self.app.apply_outcome(FetchOutcome {
                    result: Err(FetchError::new("fetch task ended without a result")),
                    fetched_at: Utc::now(),
                    elapsed: Duration::ZERO,
                })
            }
        }
    }

    pub(crate) fn render(&self, f: &mut Frame) {
        let vm = self.app.view_model();

        let rows = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

        let body = Layout::horizontal([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(rows[2]);

        f.render_widget(HeaderView::new(&vm.title, &vm.source), rows[0]);
        f.render_widget(StatusView::new(&vm.status), rows[1]);
        f.render_widget(ChartView::new(&vm.chart), body[0]);
        f.render_widget(ControlsView::new(&vm.controls), body[1]);
        f.render_widget(TooltipView::new(vm.tooltip.as_ref()), rows[3]);
        f.render_widget(HelpView, rows[4]);
    }
}
