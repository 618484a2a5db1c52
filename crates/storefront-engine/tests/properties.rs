use proptest::prelude::*;
use storefront_engine::{CatalogState, ChartDataset, FilterSortEngine};
use storefront_testing::{product, sample_catalog};
use storefront_types::{CategoryFilter, Product, SortKey};

const CATEGORIES: [&str; 3] = ["x", "y", "z"];

fn arb_product() -> impl Strategy<Value = Product> {
    (
        0u64..1_000,
        "[A-Za-z ]{0,12}",
        0u32..50,
        prop::sample::select(CATEGORIES.to_vec()),
    )
        .prop_map(|(id, title, cents, category)| {
            // Coarse prices so ties are common
            product(id, &title, f64::from(cents) * 0.5, category)
        })
}

fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(arb_product(), 0..24)
}

fn arb_category() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        prop::sample::select(CATEGORIES.to_vec()).prop_map(CategoryFilter::only),
    ]
}

fn arb_sort() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::PriceAsc),
        Just(SortKey::PriceDesc),
        Just(SortKey::TitleAsc),
        Just(SortKey::TitleDesc),
        Just(SortKey::None),
    ]
}

/// Products are tagged with their input position so stability can be checked.
fn tag_positions(catalog: &[Product]) -> Vec<Product> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, p)| Product {
            id: index as u64,
            ..p.clone()
        })
        .collect()
}

fn is_subsequence(needle: &[u64], haystack: &[u64]) -> bool {
    let mut remaining = haystack.iter();
    needle.iter().all(|id| remaining.any(|h| h == id))
}

fn ids(products: &[Product]) -> Vec<u64> {
    products.iter().map(|p| p.id).collect()
}

proptest! {
    #[test]
    fn category_filter_keeps_matches_in_order(catalog in arb_catalog(), category in prop::sample::select(CATEGORIES.to_vec()), sort in arb_sort()) {
        let engine = FilterSortEngine::new(None).unwrap();
        let catalog = tag_positions(&catalog);
        let filter = CategoryFilter::only(category);

        let derived = engine.apply(&catalog, &filter, sort);
        prop_assert!(derived.len() <= catalog.len());
        prop_assert!(derived.iter().all(|p| p.category == category));

        let expected = catalog.iter().filter(|p| p.category == category).count();
        prop_assert_eq!(derived.len(), expected);

        if sort == SortKey::None {
            prop_assert!(is_subsequence(&ids(&derived), &ids(&catalog)));
        }
    }

    #[test]
    fn all_is_a_permutation(catalog in arb_catalog(), sort in arb_sort()) {
        let engine = FilterSortEngine::new(None).unwrap();
        let catalog = tag_positions(&catalog);

        let mut derived_ids = ids(&engine.apply(&catalog, &CategoryFilter::All, sort));
        derived_ids.sort_unstable();
        prop_assert_eq!(derived_ids, ids(&catalog));
    }

    #[test]
    fn price_sorts_are_monotonic_and_stable(catalog in arb_catalog(), category in arb_category()) {
        let engine = FilterSortEngine::new(None).unwrap();
        let catalog = tag_positions(&catalog);

        let asc = engine.apply(&catalog, &category, SortKey::PriceAsc);
        for pair in asc.windows(2) {
            prop_assert!(pair[0].price <= pair[1].price);
            if pair[0].price == pair[1].price {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }

        let desc = engine.apply(&catalog, &category, SortKey::PriceDesc);
        for pair in desc.windows(2) {
            prop_assert!(pair[0].price >= pair[1].price);
            if pair[0].price == pair[1].price {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn title_sorts_follow_collation(catalog in arb_catalog(), category in arb_category()) {
        let engine = FilterSortEngine::new(None).unwrap();
        let catalog = tag_positions(&catalog);

        let asc = engine.apply(&catalog, &category, SortKey::TitleAsc);
        for pair in asc.windows(2) {
            let order = engine.compare_titles(&pair[0].title, &pair[1].title);
            prop_assert!(order.is_le());
            if order.is_eq() {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }

        let desc = engine.apply(&catalog, &category, SortKey::TitleDesc);
        for pair in desc.windows(2) {
            prop_assert!(engine.compare_titles(&pair[0].title, &pair[1].title).is_ge());
        }
    }

    #[test]
    fn reapplying_is_a_no_op(catalog in arb_catalog(), category in arb_category(), sort in arb_sort()) {
        let engine = FilterSortEngine::new(None).unwrap();

        let once = engine.apply(&catalog, &category, sort);
        let twice = engine.apply(&once, &category, sort);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn derived_always_matches_engine_output(catalog in arb_catalog(), steps in prop::collection::vec((arb_category(), arb_sort()), 0..8)) {
        let engine = FilterSortEngine::new(None).unwrap();
        let mut state = CatalogState::new(FilterSortEngine::new(None).unwrap());
        state.load_succeeded(catalog.clone()).unwrap();

        for (category, sort) in steps {
            state.set_category(category);
            state.set_sort(sort);
            let expected = engine.apply(&catalog, state.category(), state.sort());
            prop_assert_eq!(state.derived(), expected.as_slice());
            prop_assert_eq!(state.raw(), catalog.as_slice());
        }
    }

    #[test]
    fn dataset_is_index_aligned(catalog in arb_catalog()) {
        let dataset = ChartDataset::from_products(&catalog);
        prop_assert_eq!(dataset.len(), catalog.len());
        for (index, p) in catalog.iter().enumerate() {
            prop_assert_eq!(dataset.bar(index), Some((p.title.as_str(), p.price)));
        }
    }
}

#[test]
fn test_sample_catalog_by_category() {
    let engine = FilterSortEngine::new(None).unwrap();
    let catalog = sample_catalog();

    let electronics = engine.apply(
        &catalog,
        &CategoryFilter::only("electronics"),
        SortKey::PriceDesc,
    );
    let prices: Vec<f64> = electronics.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![114.0, 64.0]);
}

#[test]
fn test_sample_catalog_title_order() {
    let engine = FilterSortEngine::new(None).unwrap();
    let derived = engine.apply(&sample_catalog(), &CategoryFilter::All, SortKey::TitleAsc);
    let ids: Vec<u64> = derived.iter().map(|p| p.id).collect();
    // Fjallraven, John Hardy, MBJ, Mens, WD 2TB, WD 4TB
    assert_eq!(ids, vec![1, 5, 18, 2, 9, 12]);
}
