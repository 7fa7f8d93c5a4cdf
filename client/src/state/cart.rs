//! Shopping cart state.
//!
//! DESIGN
//! ======
//! Lines are keyed by product id and kept in insertion order. Quantity is
//! never below 1: setting a smaller quantity removes the line.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

use super::store::Persisted;
use crate::net::types::{OrderLine, Product};
use crate::util::storage::BrowserStorage;

pub const CART_STORAGE_KEY: &str = "storefront_cart";

/// One cart line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub quantity: u32,
    pub price: f64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
}

impl CartItem {
    /// A single unit of `product`.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            quantity: 1,
            price: product.price,
            name: product.name.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
        }
    }

    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Cart contents, serialized to storage as a JSON array of lines.
///
/// Stored lines are replayed through [`Cart::add`] on load: repeated ids are
/// merged and zero-quantity lines are dropped.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl From<Vec<CartItem>> for Cart {
    fn from(lines: Vec<CartItem>) -> Self {
        let mut cart = Self::default();
        for line in lines.into_iter().filter(|l| l.quantity > 0) {
            cart.add(line);
        }
        cart
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

/// Cart mirrored to `localStorage`.
pub type CartStore<S = BrowserStorage> = Persisted<Cart, S>;

/// An unhydrated cart store bound to its storage key.
pub fn cart_store<S: crate::util::storage::KeyValueStorage>(storage: S) -> CartStore<S> {
    Persisted::new(CART_STORAGE_KEY, storage)
}

impl Cart {
    /// Add `item`. An existing line for the same id grows by `item.quantity`.
    pub fn add(&mut self, item: CartItem) {
        let quantity = item.quantity.max(1);
        if let Some(line) = self.items.iter_mut().find(|l| l.id == item.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartItem { quantity, ..item });
        }
    }

    /// Remove the line for `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|l| l.id != id);
    }

    /// Set the quantity of an existing line; `0` removes it.
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|l| l.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines, saturating at `u32::MAX`.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items.iter().fold(0, |acc, l| acc.saturating_add(l.quantity))
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Σ price × quantity.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Lines in the `{product_id, quantity}` shape the order API expects.
    #[must_use]
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.items
            .iter()
            .map(|l| OrderLine { product_id: l.id.clone(), quantity: l.quantity })
            .collect()
    }
}
