//! Wishlist state: a set of favorited products in insertion order.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use serde::{Deserialize, Serialize};

use super::store::Persisted;
use crate::net::types::Product;
use crate::util::storage::{BrowserStorage, KeyValueStorage};

pub const WISHLIST_STORAGE_KEY: &str = "storefront_wishlist";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
}

impl WishlistItem {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
        }
    }
}

/// Stored entries are replayed through [`Wishlist::add`] on load, so a
/// repeated id keeps its first entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<WishlistItem>", into = "Vec<WishlistItem>")]
pub struct Wishlist {
    items: Vec<WishlistItem>,
}

impl From<Vec<WishlistItem>> for Wishlist {
    fn from(entries: Vec<WishlistItem>) -> Self {
        let mut wishlist = Self::default();
        for entry in entries {
            wishlist.add(entry);
        }
        wishlist
    }
}

impl From<Wishlist> for Vec<WishlistItem> {
    fn from(wishlist: Wishlist) -> Self {
        wishlist.items
    }
}

pub type WishlistStore<S = BrowserStorage> = Persisted<Wishlist, S>;

pub fn wishlist_store<S: KeyValueStorage>(storage: S) -> WishlistStore<S> {
    Persisted::new(WISHLIST_STORAGE_KEY, storage)
}

impl Wishlist {
    /// Add `item` unless its id is already present. Returns `true` if added.
    pub fn add(&mut self, item: WishlistItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    /// Add when absent, remove when present. Returns `true` if the item is now listed.
    pub fn toggle(&mut self, item: WishlistItem) -> bool {
        if self.contains(&item.id) {
            self.remove(&item.id);
            false
        } else {
            self.items.push(item);
            true
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
