use storefront_engine::{CatalogState, FilterControls};

use super::dashboard::category_option;
use crate::presentation::view_models::{
    CategoryListViewModel, ProductListViewModel, ProductRowViewModel,
};

pub fn present_product_list(state: &CatalogState) -> ProductListViewModel {
    ProductListViewModel {
        category: state.category().as_str().to_string(),
        sort: state.sort().as_str().to_string(),
        total: state.raw().len(),
        products: state
            .derived()
            .iter()
            .map(|p| ProductRowViewModel {
                id: p.id,
                title: p.title.clone(),
                price: p.price,
                category: p.category.clone(),
            })
            .collect(),
    }
}

pub fn present_categories(controls: &FilterControls, fetched: bool) -> CategoryListViewModel {
    CategoryListViewModel {
        fetched,
        options: controls
            .category_options()
            .iter()
            .map(category_option)
            .collect(),
    }
}
