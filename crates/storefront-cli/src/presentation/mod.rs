//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! For the dashboard the renderer is a router: input goes to [`DashboardApp`],
//! which rebuilds a [`DashboardViewModel`] for every frame and hands it to the
//! ratatui views.
//!
//! - `view_models/`: serializable data, raw numbers rather than formatted text
//! - `presenters/`: engine state to view model, no formatting
//! - `views/`: `fmt::Display` and ratatui `Widget` implementations
//! - `renderers/`: console output and the terminal event loop
//! - `formatters/`: string helpers used by views
//!
//! [`DashboardApp`]: renderers::DashboardApp
//! [`DashboardViewModel`]: view_models::DashboardViewModel

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, DashboardApp, TuiEvent, TuiRenderer};
