//! Shopping cart state.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line.
pub const MAX_QUANTITY_PER_LINE: u32 = 99;

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// App-scoped shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Add a product, merging with an existing line for the same product.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Result<(), CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            let merged = line.quantity.saturating_add(quantity);
            if merged > MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::QuantityExceedsLimit(merged, MAX_QUANTITY_PER_LINE));
            }
            line.quantity = merged;
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(quantity, MAX_QUANTITY_PER_LINE));
        }
        self.lines.push(CartLine {
            product_id,
            name: name.into(),
            unit_price,
            quantity,
        });
        Ok(())
    }

    /// Set a line's quantity; zero removes the line.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) -> Result<(), CommerceError> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }
        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(quantity, MAX_QUANTITY_PER_LINE));
        }
        let line = self
            .lines
            .iter_mut()
            .find(|l| &l.product_id == product_id)
            .ok_or_else(|| CommerceError::ItemNotInCart(product_id.to_string()))?;
        line.quantity = quantity;
        Ok(())
    }

    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<(), CommerceError> {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        if self.lines.len() == before {
            return Err(CommerceError::ItemNotInCart(product_id.to_string()));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lipstick() -> ProductId {
        ProductId::new("velvet-lipstick")
    }

    #[test]
    fn test_add_merges_lines() {
        let mut cart = Cart::new();
        cart.add_item(lipstick(), "Velvet Lipstick", Money::rupees(450), 1).unwrap();
        cart.add_item(lipstick(), "Velvet Lipstick", Money::rupees(450), 2).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal(), Money::rupees(1350));
    }

    #[test]
    fn test_add_rejects_zero_and_overflow() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add_item(lipstick(), "Velvet Lipstick", Money::rupees(450), 0),
            Err(CommerceError::InvalidQuantity(0))
        );
        cart.add_item(lipstick(), "Velvet Lipstick", Money::rupees(450), 98).unwrap();
        assert!(matches!(
            cart.add_item(lipstick(), "Velvet Lipstick", Money::rupees(450), 2),
            Err(CommerceError::QuantityExceedsLimit(100, 99))
        ));
        assert_eq!(cart.item_count(), 98);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(lipstick(), "Velvet Lipstick", Money::rupees(450), 2).unwrap();
        cart.update_quantity(&lipstick(), 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_item() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.remove_item(&lipstick()),
            Err(CommerceError::ItemNotInCart(_))
        ));
        assert!(cart.update_quantity(&lipstick(), 3).is_err());
    }
}
