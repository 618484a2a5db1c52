//! Ratatui widgets for the dashboard.
//!
//! Each view borrows a piece of [`DashboardViewModel`] and only maps it to
//! widgets; the numbers and selections are decided by the presenter.
//!
//! [`DashboardViewModel`]: crate::presentation::view_models::DashboardViewModel

pub mod chart;
pub mod controls;
pub mod header;
pub mod help;
pub mod status;

pub use chart::{ChartView, TooltipView};
pub use controls::{ControlsView, SelectorView};
pub use header::HeaderView;
pub use help::HelpView;
pub use status::StatusView;

use crate::presentation::view_models::StatusViewModel;
use ratatui::style::Color;

pub(crate) fn status_color(status: &StatusViewModel) -> Color {
    match status {
        StatusViewModel::Loading => Color::Yellow,
        StatusViewModel::Failed { .. } => Color::Red,
        StatusViewModel::Ready { .. } => Color::Green,
    }
}
