use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::{format_price, truncate};
use crate::presentation::view_models::{CategoryListViewModel, ProductListViewModel};

const ID_WIDTH: usize = 5;
const PRICE_WIDTH: usize = 10;
const CATEGORY_WIDTH: usize = 18;
const MIN_TITLE_WIDTH: usize = 16;

pub struct ProductListView<'a> {
    model: &'a ProductListViewModel,
    width: Option<usize>,
    color: bool,
}

impl<'a> ProductListView<'a> {
    pub fn new(model: &'a ProductListViewModel) -> Self {
        Self {
            model,
            width: None,
            color: false,
        }
    }

    /// Truncate titles so that rows fit `width` columns.
    pub fn with_width(mut self, width: Option<usize>) -> Self {
        self.width = width;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn title_width(&self) -> Option<usize> {
        let fixed = ID_WIDTH + PRICE_WIDTH + CATEGORY_WIDTH + 3;
        self.width
            .map(|w| w.saturating_sub(fixed).max(MIN_TITLE_WIDTH))
    }
}

impl<'a> fmt::Display for ProductListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.model.products.is_empty() {
            return writeln!(f, "No products match category '{}'.", self.model.category);
        }

        let header = format!(
            "{:<id$} {:>price$} {:<cat$} TITLE",
            "ID",
            "PRICE",
            "CATEGORY",
            id = ID_WIDTH,
            price = PRICE_WIDTH,
            cat = CATEGORY_WIDTH
        );
        if self.color {
            writeln!(f, "{}", header.bold())?;
        } else {
            writeln!(f, "{}", header)?;
        }

        for row in &self.model.products {
            let title = match self.title_width() {
                Some(width) => truncate(&row.title, width),
                None => row.title.clone(),
            };
            let price = format!("{:>width$}", format_price(row.price), width = PRICE_WIDTH);
            let price = if self.color {
                price.green().to_string()
            } else {
                price
            };
            writeln!(
                f,
                "{:<id$} {} {:<cat$} {}",
                row.id,
                price,
                truncate(&row.category, CATEGORY_WIDTH),
                title,
                id = ID_WIDTH,
                cat = CATEGORY_WIDTH
            )?;
        }

        let summary = format!(
            "{} of {} products (category: {}, sort: {})",
            self.model.products.len(),
            self.model.total,
            self.model.category,
            self.model.sort
        );
        if self.color {
            writeln!(f, "\n{}", summary.dimmed())
        } else {
            writeln!(f, "\n{}", summary)
        }
    }
}

pub struct CategoryListView<'a> {
    model: &'a CategoryListViewModel,
}

impl<'a> CategoryListView<'a> {
    pub fn new(model: &'a CategoryListViewModel) -> Self {
        Self { model }
    }
}

impl<'a> fmt::Display for CategoryListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for option in &self.model.options {
            writeln!(f, "{:<20} {}", option.value, option.label)?;
        }
        Ok(())
    }
}
