//! Product catalog view state: loaded products plus filter inputs.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::Product;

#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    /// Exact category to show, `None` for all.
    pub category: Option<String>,
    /// Case-insensitive substring over name and category.
    pub query: String,
}

impl CatalogState {
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.loading = false;
        self.error = None;
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Sorted distinct non-empty categories.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .products
            .iter()
            .filter(|p| !p.category.is_empty())
            .map(|p| p.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Products passing both the category filter and the search query.
    #[must_use]
    pub fn visible_products(&self) -> Vec<Product> {
        let needle = self.query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| self.category.as_ref().map_or(true, |c| &p.category == c))
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}
