use std::time::Duration;

use chrono::{DateTime, Utc};
use storefront_engine::{CatalogState, ChartPresenter, ControlFocus, FilterControls, LoadPhase};
use storefront_types::CategoryFilter;

use crate::presentation::view_models::{
    BarViewModel, ChartViewModel, ControlsViewModel, DashboardViewModel, OptionViewModel,
    SelectorViewModel, StatusViewModel, TooltipViewModel,
};

pub const DASHBOARD_TITLE: &str = "Data Visualisation Component";

/// When the single fetch completed and how long it took.
#[derive(Debug, Clone, Copy)]
pub struct FetchStamp {
    pub fetched_at: DateTime<Utc>,
    pub elapsed: Duration,
}

pub struct DashboardInput<'a> {
    pub state: &'a CatalogState,
    pub controls: &'a FilterControls,
    pub chart: &'a ChartPresenter,
    pub highlighted: Option<usize>,
    pub source: &'a str,
    pub fetch: Option<FetchStamp>,
}

pub fn present_dashboard(input: DashboardInput<'_>) -> DashboardViewModel {
    let DashboardInput {
        state,
        controls,
        chart,
        highlighted,
        source,
        fetch,
    } = input;

    let status = match state.phase() {
        LoadPhase::Loading => StatusViewModel::Loading,
        LoadPhase::Failed { message } => StatusViewModel::Failed {
            message: message.clone(),
        },
        LoadPhase::Ready => StatusViewModel::Ready {
            shown: state.derived().len(),
            total: state.raw().len(),
            fetched_at: fetch.map(|f| f.fetched_at),
            elapsed_ms: fetch.map(|f| f.elapsed.as_millis() as u64),
        },
    };

    let dataset = chart.dataset();
    let config = chart.config();
    let highlighted = highlighted.filter(|i| *i < dataset.len());

    let tooltip = highlighted.and_then(|index| {
        let (title, price) = dataset.bar(index)?;
        let category = state
            .derived()
            .get(index)
            .map(|p| p.category.clone())
            .unwrap_or_default();
        Some(TooltipViewModel {
            index,
            series_label: dataset.series_label().to_string(),
            title: title.to_string(),
            price,
            category,
        })
    });

    DashboardViewModel {
        title: DASHBOARD_TITLE.to_string(),
        source: source.to_string(),
        status,
        chart: ChartViewModel {
            series_label: dataset.series_label().to_string(),
            bars: dataset
                .bars()
                .map(|(label, value)| BarViewModel {
                    label: label.to_string(),
                    value,
                })
                .collect(),
            axis_max: dataset.axis_max(),
            begin_at_zero: config.begin_at_zero,
            legend: config.legend,
            highlighted,
        },
        controls: present_controls(state, controls),
        tooltip,
    }
}

fn present_controls(state: &CatalogState, controls: &FilterControls) -> ControlsViewModel {
    let category_options = controls.category_options();
    let category = SelectorViewModel {
        caption: "Filter by Category:".to_string(),
        options: category_options.iter().map(category_option).collect(),
        selected: category_options.iter().position(|c| c == state.category()),
        placeholder: state.category().label(),
        focused: controls.focus() == ControlFocus::Category,
    };

    let sort_options = controls.sort_options();
    let sort = SelectorViewModel {
        caption: "Sort by:".to_string(),
        options: sort_options
            .iter()
            .map(|key| OptionViewModel {
                value: key.as_str().to_string(),
                label: key.label().to_string(),
            })
            .collect(),
        selected: sort_options.iter().position(|key| *key == state.sort()),
        placeholder: state.sort().label().to_string(),
        focused: controls.focus() == ControlFocus::Sort,
    };

    ControlsViewModel { category, sort }
}

pub(crate) fn category_option(category: &CategoryFilter) -> OptionViewModel {
    OptionViewModel {
        value: category.as_str().to_string(),
        label: category.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_engine::{DrawingSurface, FilterSortEngine};
    use storefront_testing::{product, sample_catalog};
    use storefront_types::SortKey;

    fn fixture() -> (CatalogState, FilterControls, ChartPresenter) {
        let state = CatalogState::new(FilterSortEngine::new(None).unwrap());
        let controls = FilterControls::new();
        let chart = ChartPresenter::new(DrawingSurface::new("test"));
        (state, controls, chart)
    }

    fn present<'a>(
        state: &'a CatalogState,
        controls: &'a FilterControls,
        chart: &'a ChartPresenter,
        highlighted: Option<usize>,
    ) -> DashboardViewModel {
        present_dashboard(DashboardInput {
            state,
            controls,
            chart,
            highlighted,
            source: "fixture",
            fetch: None,
        })
    }

    #[test]
    fn test_loading_dashboard_has_title_and_empty_chart() {
        let (state, controls, chart) = fixture();
        let vm = present(&state, &controls, &chart, None);

        assert_eq!(vm.title, "Data Visualisation Component");
        assert_eq!(vm.status, StatusViewModel::Loading);
        assert!(vm.chart.bars.is_empty());
        assert_eq!(vm.chart.series_label, "Price");
        assert!(vm.chart.begin_at_zero);
        assert!(vm.tooltip.is_none());
    }

    #[test]
    fn test_failed_dashboard_keeps_controls() {
        let (mut state, controls, mut chart) = fixture();
        state.load_failed("Failed to fetch products").unwrap();
        chart.sync(&state).unwrap();

        let vm = present(&state, &controls, &chart, Some(0));
        assert_eq!(
            vm.status,
            StatusViewModel::Failed {
                message: "Failed to fetch products".to_string()
            }
        );
        assert!(vm.chart.bars.is_empty());
        assert_eq!(vm.chart.highlighted, None);
        assert_eq!(vm.controls.category.options.len(), 5);
        assert_eq!(vm.controls.category.selected, Some(0));
        assert_eq!(vm.controls.sort.options.len(), 4);
    }

    #[test]
    fn test_ready_dashboard_bars_follow_derived_order() {
        let (mut state, controls, mut chart) = fixture();
        state.load_succeeded(sample_catalog()).unwrap();
        state.set_sort(SortKey::PriceDesc);
        chart.sync(&state).unwrap();

        let vm = present(&state, &controls, &chart, None);
        let values: Vec<f64> = vm.chart.bars.iter().map(|b| b.value).collect();
        assert_eq!(values, vec![695.0, 114.0, 109.95, 64.0, 22.3, 9.85]);
        assert_eq!(vm.controls.sort.selected, Some(1));
        assert!(matches!(
            vm.status,
            StatusViewModel::Ready {
                shown: 6,
                total: 6,
                ..
            }
        ));
    }

    #[test]
    fn test_tooltip_describes_highlighted_bar() {
        let (mut state, controls, mut chart) = fixture();
        state
            .load_succeeded(vec![
                product(1, "B", 10.0, "x"),
                product(2, "A", 20.0, "y"),
            ])
            .unwrap();
        chart.sync(&state).unwrap();

        let vm = present(&state, &controls, &chart, Some(1));
        assert_eq!(
            vm.tooltip,
            Some(TooltipViewModel {
                index: 1,
                series_label: "Price".to_string(),
                title: "A".to_string(),
                price: 20.0,
                category: "y".to_string(),
            })
        );
    }

    #[test]
    fn test_unsorted_has_no_selected_sort_option() {
        let (state, controls, chart) = fixture();
        let vm = present(&state, &controls, &chart, None);
        assert_eq!(vm.controls.sort.selected, None);
        assert_eq!(vm.controls.sort.placeholder, "Unsorted");
        assert!(vm.controls.category.focused);
        assert!(!vm.controls.sort.focused);
    }
}
