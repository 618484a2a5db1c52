use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardViewModel {
    pub title: String,
    pub source: String,
    pub status: StatusViewModel,
    pub chart: ChartViewModel,
    pub controls: ControlsViewModel,
    pub tooltip: Option<TooltipViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum StatusViewModel {
    Loading,
    Failed {
        message: String,
    },
    Ready {
        shown: usize,
        total: usize,
        fetched_at: Option<DateTime<Utc>>,
        elapsed_ms: Option<u64>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartViewModel {
    pub series_label: String,
    pub bars: Vec<BarViewModel>,
    pub axis_max: f64,
    pub begin_at_zero: bool,
    pub legend: bool,
    pub highlighted: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarViewModel {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ControlsViewModel {
    pub category: SelectorViewModel,
    pub sort: SelectorViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectorViewModel {
    pub caption: String,
    pub options: Vec<OptionViewModel>,
    /// `None` when the current value is not one of the options (unsorted).
    pub selected: Option<usize>,
    pub placeholder: String,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionViewModel {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipViewModel {
    pub index: usize,
    pub series_label: String,
    pub title: String,
    pub price: f64,
    pub category: String,
}
