//! Catalog filtering and search
//!
//! Two surfaces share one matching rule: the product grid (category chip +
//! free-text query) and the global search overlay (query only). Matching is a
//! case-insensitive substring test over name, description and category id.
//! Results keep catalog order; nothing is ranked.

use derive_more::Display;

use super::catalog::Product;

/// Shortcut terms offered by the search overlay before anything is typed
pub const POPULAR_SEARCHES: [&str; 5] = ["Rings", "Necklaces", "Earrings", "Watches", "Bracelets"];

/// Id used by the "All Pieces" chip
pub const ALL_CATEGORIES_ID: &str = "all";

/// Category selection of the product grid
#[derive(Debug, Clone, PartialEq, Eq, Default, Display)]
pub enum CategoryFilter {
    #[default]
    #[display("all")]
    All,
    #[display("{_0}")]
    Category(String),
}

impl CategoryFilter {
    /// Parse a chip id; `"all"` selects everything, anything else is taken
    /// as a category id without checking that it exists.
    pub fn from_id(id: &str) -> Self {
        if id == ALL_CATEGORIES_ID {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(id.to_string())
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => product.category == *id,
        }
    }

    pub fn is_selected(&self, chip_id: &str) -> bool {
        *self == CategoryFilter::from_id(chip_id)
    }
}

/// User-controlled state of the product grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub selected_category: CategoryFilter,
    pub search_query: String,
}

impl FilterState {
    pub fn new(selected_category: CategoryFilter, search_query: impl Into<String>) -> Self {
        Self {
            selected_category,
            search_query: search_query.into(),
        }
    }

    /// Products visible under this state
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        filter_products(products, &self.selected_category, &self.search_query)
    }

    /// Back to "All Pieces" with an empty query
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Case-insensitive substring match over name, description and category
pub fn matches_query(product: &Product, query: &str) -> bool {
    let needle = query.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
        || product.category.to_lowercase().contains(&needle)
}

/// Grid filter: category first, then the query when it is non-empty
pub fn filter_products<'a>(
    products: &'a [Product],
    category: &CategoryFilter,
    query: &str,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| category.matches(p))
        .filter(|p| query.is_empty() || matches_query(p, query))
        .collect()
}

/// Global search: an empty query shows no results rather than everything
pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    if query.is_empty() {
        return Vec::new();
    }
    products
        .iter()
        .filter(|p| matches_query(p, query))
        .collect()
}
