use std::cmp::Ordering;
use std::fmt;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use storefront_types::{CategoryFilter, Product, SortKey};

use crate::{Error, Result};

/// Filters a catalog by category and orders it by the selected sort key.
///
/// Titles are compared with an ICU collator rather than by code point, so
/// accented and mixed-case titles land where a reader expects them.
pub struct FilterSortEngine {
    collator: Collator,
    locale: Locale,
}

impl FilterSortEngine {
    /// Build an engine collating titles for `locale` (BCP-47), or with the
    /// root collation when no locale is given.
    pub fn new(locale: Option<&str>) -> Result<Self> {
        let locale = match locale {
            Some(tag) => tag
                .parse::<Locale>()
                .map_err(|_| Error::InvalidLocale(tag.to_string()))?,
            None => Locale::UND,
        };

        let collator = Collator::try_new(&(&locale).into(), CollatorOptions::new())
            .map_err(|e| Error::Collator(e.to_string()))?;

        Ok(Self { collator, locale })
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn compare_titles(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }

    /// Returns the subset of `products` in `category`, ordered by `sort`.
    ///
    /// The input is never reordered. Sorting is stable, so products that
    /// compare equal keep their relative input order.
    pub fn apply(
        &self,
        products: &[Product],
        category: &CategoryFilter,
        sort: SortKey,
    ) -> Vec<Product> {
        let mut selected: Vec<Product> = products
            .iter()
            .filter(|product| category.matches(&product.category))
            .cloned()
            .collect();

        match sort {
            SortKey::PriceAsc => selected.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortKey::PriceDesc => selected.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortKey::TitleAsc => selected.sort_by(|a, b| self.compare_titles(&a.title, &b.title)),
            SortKey::TitleDesc => {
                selected.sort_by(|a, b| self.compare_titles(&b.title, &a.title))
            }
            SortKey::None => {}
        }

        selected
    }
}

impl fmt::Debug for FilterSortEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterSortEngine")
            .field("locale", &self.locale.to_string())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> FilterSortEngine {
        FilterSortEngine::new(None).unwrap()
    }

    fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
        Product::new(id, title, price, category)
    }

    fn titles(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.title.as_str()).collect()
    }

    fn scenario_catalog() -> Vec<Product> {
        vec![product(1, "B", 10.0, "x"), product(2, "A", 20.0, "y")]
    }

    #[test]
    fn test_all_with_price_asc_orders_by_price() {
        let derived = engine().apply(&scenario_catalog(), &CategoryFilter::All, SortKey::PriceAsc);
        assert_eq!(titles(&derived), vec!["B", "A"]);
    }

    #[test]
    fn test_category_filter_keeps_only_matches() {
        let derived = engine().apply(
            &scenario_catalog(),
            &CategoryFilter::only("x"),
            SortKey::PriceAsc,
        );
        assert_eq!(titles(&derived), vec!["B"]);
    }

    #[test]
    fn test_title_desc_orders_descending() {
        let derived = engine().apply(&scenario_catalog(), &CategoryFilter::All, SortKey::TitleDesc);
        assert_eq!(titles(&derived), vec!["B", "A"]);
    }

    #[test]
    fn test_none_keeps_input_order() {
        let catalog = vec![
            product(1, "z", 3.0, "x"),
            product(2, "a", 1.0, "x"),
            product(3, "m", 2.0, "x"),
        ];
        let derived = engine().apply(&catalog, &CategoryFilter::All, SortKey::None);
        assert_eq!(derived, catalog);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let catalog = vec![product(1, "b", 3.0, "x"), product(2, "a", 1.0, "x")];
        let snapshot = catalog.clone();
        let _ = engine().apply(&catalog, &CategoryFilter::All, SortKey::TitleAsc);
        assert_eq!(catalog, snapshot);
    }

    #[test]
    fn test_price_ties_keep_input_order() {
        let catalog = vec![
            product(1, "first", 5.0, "x"),
            product(2, "cheap", 1.0, "x"),
            product(3, "second", 5.0, "x"),
        ];
        let asc = engine().apply(&catalog, &CategoryFilter::All, SortKey::PriceAsc);
        assert_eq!(titles(&asc), vec!["cheap", "first", "second"]);

        let desc = engine().apply(&catalog, &CategoryFilter::All, SortKey::PriceDesc);
        assert_eq!(titles(&desc), vec!["first", "second", "cheap"]);
    }

    #[test]
    fn test_titles_collate_alphabetically_not_by_byte() {
        let catalog = vec![
            product(1, "cherry", 1.0, "x"),
            product(2, "Banana", 1.0, "x"),
            product(3, "apple", 1.0, "x"),
        ];
        let derived = engine().apply(&catalog, &CategoryFilter::All, SortKey::TitleAsc);
        assert_eq!(titles(&derived), vec!["apple", "Banana", "cherry"]);
    }

    #[test]
    fn test_accented_titles_sort_with_their_base_letter() {
        let catalog = vec![
            product(1, "Zebra", 1.0, "x"),
            product(2, "Émeraude", 1.0, "x"),
            product(3, "Fjord", 1.0, "x"),
        ];
        let derived = engine().apply(&catalog, &CategoryFilter::All, SortKey::TitleAsc);
        assert_eq!(titles(&derived), vec!["Émeraude", "Fjord", "Zebra"]);
    }

    #[test]
    fn test_unknown_category_yields_empty_list() {
        let derived = engine().apply(
            &scenario_catalog(),
            &CategoryFilter::only("electronics"),
            SortKey::None,
        );
        assert!(derived.is_empty());
    }

    #[test]
    fn test_locale_tag_is_validated() {
        assert!(FilterSortEngine::new(Some("en-US")).is_ok());
        assert_eq!(
            FilterSortEngine::new(Some("not a locale")).unwrap_err(),
            Error::InvalidLocale("not a locale".to_string())
        );
    }
}
