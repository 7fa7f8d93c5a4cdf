//! Bulk order form: quantity orders keyed by product id.
//!
//! Rows where both inputs are blank are ignored, so the page can always show
//! a spare empty row.

#[cfg(test)]
#[path = "bulk_order_test.rs"]
mod bulk_order_test;

use super::validation::{FieldError, email, optional, quantity, required};
use crate::net::types::{CompanyData, OrderLine, OrderRequest};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkLine {
    pub product_id: String,
    pub quantity: String,
}

impl BulkLine {
    fn is_blank(&self) -> bool {
        self.product_id.trim().is_empty() && self.quantity.trim().is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BulkOrderForm {
    pub company_name: String,
    pub email: String,
    pub company_id: Option<String>,
    pub lines: Vec<BulkLine>,
    pub notes: String,
}

impl Default for BulkOrderForm {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            email: String::new(),
            company_id: None,
            lines: vec![BulkLine::default()],
            notes: String::new(),
        }
    }
}

/// Keys for rendering `lines` as rows, one per position.
#[must_use]
pub fn row_indices(lines: &[BulkLine]) -> Vec<usize> {
    (0..lines.len()).collect()
}

impl BulkOrderForm {
    pub fn add_line(&mut self) {
        self.lines.push(BulkLine::default());
    }

    /// Remove row `index`, always leaving at least one row.
    pub fn remove_line(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
        if self.lines.is_empty() {
            self.lines.push(BulkLine::default());
        }
    }

    /// # Errors
    ///
    /// Returns the first [`FieldError`] found.
    pub fn validate(&self) -> Result<(), FieldError> {
        self.to_order_request().map(|_| ())
    }

    /// Validate and build the order payload.
    ///
    /// Repeated product ids are merged into one line.
    ///
    /// # Errors
    ///
    /// Returns the first [`FieldError`] found, or one for a form with no lines.
    pub fn to_order_request(&self) -> Result<OrderRequest, FieldError> {
        let name = required("company_name", "Company name", &self.company_name)?;
        let email = email("email", &self.email)?;

        let mut cart_items: Vec<OrderLine> = Vec::new();
        for line in self.lines.iter().filter(|l| !l.is_blank()) {
            let product_id = required("lines", "Product id", &line.product_id)?;
            let qty = quantity("lines", &line.quantity)?;
            match cart_items.iter_mut().find(|l| l.product_id == product_id) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(qty),
                None => cart_items.push(OrderLine { product_id, quantity: qty }),
            }
        }
        if cart_items.is_empty() {
            return Err(FieldError::new("lines", "Add at least one product."));
        }

        Ok(OrderRequest {
            company_data: CompanyData {
                company_id: self.company_id.as_deref().and_then(optional),
                name,
                email,
                ..CompanyData::default()
            },
            cart_items,
            notes: optional(&self.notes),
        })
    }
}
