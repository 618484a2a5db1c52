use storefront_types::{CategoryFilter, KNOWN_CATEGORIES, Product, SortKey};

use crate::{CatalogState, Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlFocus {
    #[default]
    Category,
    Sort,
}

/// The category and sort selectors.
///
/// Both write straight into [`CatalogState`]; there is no pending value and no
/// confirmation step.
#[derive(Debug, Clone)]
pub struct FilterControls {
    categories: Vec<CategoryFilter>,
    focus: ControlFocus,
}

impl Default for FilterControls {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterControls {
    pub fn new() -> Self {
        let mut categories = vec![CategoryFilter::All];
        categories.extend(KNOWN_CATEGORIES.iter().map(|c| CategoryFilter::only(*c)));
        Self {
            categories,
            focus: ControlFocus::Category,
        }
    }

    pub fn category_options(&self) -> &[CategoryFilter] {
        &self.categories
    }

    pub fn sort_options(&self) -> &'static [SortKey] {
        &SortKey::OPTIONS
    }

    /// Append categories present in the catalog but missing from the
    /// selector, in first-seen order.
    pub fn extend_categories(&mut self, products: &[Product]) {
        for product in products {
            let option = CategoryFilter::only(product.category.as_str());
            if !self.categories.contains(&option) {
                tracing::debug!(category = %product.category, "category option added");
                self.categories.push(option);
            }
        }
    }

    pub fn focus(&self) -> ControlFocus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            ControlFocus::Category => ControlFocus::Sort,
            ControlFocus::Sort => ControlFocus::Category,
        };
    }

    pub fn select_category(&self, state: &mut CatalogState, category: CategoryFilter) -> Result<()> {
        if !self.categories.contains(&category) {
            return Err(Error::UnknownOption(category.to_string()));
        }
        state.set_category(category);
        Ok(())
    }

    pub fn select_sort(&self, state: &mut CatalogState, sort: SortKey) -> Result<()> {
        if !SortKey::OPTIONS.contains(&sort) {
            return Err(Error::UnknownOption(sort.to_string()));
        }
        state.set_sort(sort);
        Ok(())
    }

    /// Move the category selection by `step` options, wrapping around.
    pub fn cycle_category(&self, state: &mut CatalogState, step: isize) {
        let current = self.categories.iter().position(|c| c == state.category());
        let next = cycle_index(current, step, self.categories.len());
        state.set_category(self.categories[next].clone());
    }

    /// Move the sort selection by `step` options, wrapping around. From the
    /// unsorted initial state, forward lands on the first option.
    pub fn cycle_sort(&self, state: &mut CatalogState, step: isize) {
        let current = SortKey::OPTIONS.iter().position(|s| *s == state.sort());
        let next = cycle_index(current, step, SortKey::OPTIONS.len());
        state.set_sort(SortKey::OPTIONS[next]);
    }

    /// Change whichever selector currently has focus.
    pub fn step_focused(&self, state: &mut CatalogState, step: isize) {
        match self.focus {
            ControlFocus::Category => self.cycle_category(state, step),
            ControlFocus::Sort => self.cycle_sort(state, step),
        }
    }
}

fn cycle_index(current: Option<usize>, step: isize, len: usize) -> usize {
    let len = len as isize;
    match current {
        Some(index) => (index as isize + step).rem_euclid(len) as usize,
        None if step >= 0 => 0,
        None => (len - 1) as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterSortEngine;

    fn state() -> CatalogState {
        CatalogState::new(FilterSortEngine::new(None).unwrap())
    }

    #[test]
    fn test_default_category_options() {
        let controls = FilterControls::new();
        let options: Vec<_> = controls
            .category_options()
            .iter()
            .map(CategoryFilter::as_str)
            .collect();
        assert_eq!(
            options,
            vec!["all", "men's clothing", "women's clothing", "jewelery", "electronics"]
        );
    }

    #[test]
    fn test_extend_categories_appends_unseen_in_order() {
        let mut controls = FilterControls::new();
        controls.extend_categories(&[
            Product::new(1, "a", 1.0, "electronics"),
            Product::new(2, "b", 1.0, "garden"),
            Product::new(3, "c", 1.0, "books"),
            Product::new(4, "d", 1.0, "garden"),
        ]);
        let tail: Vec<_> = controls.category_options()[5..]
            .iter()
            .map(CategoryFilter::as_str)
            .collect();
        assert_eq!(tail, vec!["garden", "books"]);
    }

    #[test]
    fn test_select_writes_through_immediately() {
        let controls = FilterControls::new();
        let mut state = state();

        controls
            .select_category(&mut state, CategoryFilter::only("jewelery"))
            .unwrap();
        controls.select_sort(&mut state, SortKey::TitleAsc).unwrap();

        assert_eq!(state.category(), &CategoryFilter::only("jewelery"));
        assert_eq!(state.sort(), SortKey::TitleAsc);
    }

    #[test]
    fn test_select_rejects_values_outside_option_set() {
        let controls = FilterControls::new();
        let mut state = state();

        assert_eq!(
            controls.select_category(&mut state, CategoryFilter::only("garden")),
            Err(Error::UnknownOption("garden".to_string()))
        );
        assert_eq!(
            controls.select_sort(&mut state, SortKey::None),
            Err(Error::UnknownOption("none".to_string()))
        );
        assert_eq!(state.category(), &CategoryFilter::All);
    }

    #[test]
    fn test_cycle_sort_from_unsorted() {
        let controls = FilterControls::new();

        let mut forward = state();
        controls.cycle_sort(&mut forward, 1);
        assert_eq!(forward.sort(), SortKey::PriceAsc);

        let mut backward = state();
        controls.cycle_sort(&mut backward, -1);
        assert_eq!(backward.sort(), SortKey::TitleDesc);
    }

    #[test]
    fn test_cycle_category_wraps() {
        let controls = FilterControls::new();
        let mut state = state();

        controls.cycle_category(&mut state, -1);
        assert_eq!(state.category(), &CategoryFilter::only("electronics"));
        controls.cycle_category(&mut state, 1);
        assert_eq!(state.category(), &CategoryFilter::All);
    }

    #[test]
    fn test_step_follows_focus() {
        let mut controls = FilterControls::new();
        let mut state = state();

        controls.step_focused(&mut state, 1);
        assert_eq!(state.category(), &CategoryFilter::only("men's clothing"));
        assert_eq!(state.sort(), SortKey::None);

        controls.toggle_focus();
        assert_eq!(controls.focus(), ControlFocus::Sort);
        controls.step_focused(&mut state, 1);
        assert_eq!(state.sort(), SortKey::PriceAsc);
    }
}
