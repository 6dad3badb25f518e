//! Wishlist state.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free set of saved products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Wishlist {
    items: Vec<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ProductId] {
        &self.items
    }

    /// Returns `false` if the product was already saved.
    pub fn add(&mut self, product_id: ProductId) -> bool {
        if self.contains(&product_id) {
            return false;
        }
        self.items.push(product_id);
        true
    }

    /// Returns `false` if the product was not saved.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|id| id != product_id);
        self.items.len() != before
    }

    /// Flip membership and return whether the product is now saved.
    pub fn toggle(&mut self, product_id: ProductId) -> bool {
        if self.remove(&product_id) {
            false
        } else {
            self.items.push(product_id);
            true
        }
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|id| id == product_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wishlist_no_duplicates() {
        let mut list = Wishlist::new();
        assert!(list.add(ProductId::new("kajal")));
        assert!(!list.add(ProductId::new("kajal")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_wishlist_toggle() {
        let mut list = Wishlist::new();
        assert!(list.toggle(ProductId::new("blush")));
        assert!(list.contains(&ProductId::new("blush")));
        assert!(!list.toggle(ProductId::new("blush")));
        assert!(list.is_empty());
    }
}
