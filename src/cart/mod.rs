//! Client-side cart aggregation
//!
//! Holds the selected products and quantities for the active shopping
//! session. The state lives only in memory; it is not persisted across
//! reloads. Derived totals are pure folds over the line collection,
//! recomputed on demand.

pub mod checkout;

pub use checkout::{CheckoutError, CheckoutForm};

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::product::Product;

/// One product entry and its selected quantity in the active session
///
/// Carries a denormalized snapshot of the product so the cart can render
/// without re-fetching the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    /// Always positive; a line at quantity zero is removed instead
    pub quantity: u32,
}

impl CartLine {
    /// Price times quantity for this line
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The active session's cart, keyed by product id
///
/// Lines keep insertion order so the cart renders stably across quantity
/// updates.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: IndexMap<String, CartLine>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no lines are present
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate the lines in insertion order
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Add one unit of `product`
    ///
    /// Increments the quantity if the product is already in the cart, else
    /// inserts a new line at quantity 1.
    pub fn add(&mut self, product: &Product) {
        self.lines
            .entry(product.id.clone())
            .and_modify(|line| line.quantity += 1)
            .or_insert_with(|| CartLine {
                product_id: product.id.clone(),
                name: product.name.clone(),
                description: product.description.clone(),
                price: product.price,
                quantity: 1,
            });
    }

    /// Set the quantity of the line for `product_id`
    ///
    /// A quantity of zero or less removes the line entirely. Unknown ids are
    /// ignored.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i32) {
        if quantity <= 0 {
            self.remove(product_id);
        } else if let Some(line) = self.lines.get_mut(product_id) {
            line.quantity = quantity as u32;
        }
    }

    /// Remove the line for `product_id`, keeping the remaining order intact
    pub fn remove(&mut self, product_id: &str) {
        self.lines.shift_remove(product_id);
    }

    /// Drop every line
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of units across all lines
    pub fn total_items(&self) -> u32 {
        self.lines.values().map(|line| line.quantity).sum()
    }

    /// Sum of price times quantity across all lines (pre-tax)
    pub fn total_price(&self) -> Decimal {
        self.lines.values().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: &str, cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            description: String::new(),
            price: Decimal::new(cents, 2),
            category: "Misc".to_string(),
            image_url: "/images/placeholder.jpg".to_string(),
            stock: 10,
            featured: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_inserts_then_increments() {
        let mut cart = Cart::new();
        let p = product("1", 19999);

        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.total_items(), 2);
        let line = cart.lines().next().unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.line_total(), Decimal::new(39998, 2));
    }

    #[test]
    fn test_total_price_sums_lines() {
        let mut cart = Cart::new();
        cart.add(&product("1", 10000)); // 100.00
        cart.add(&product("2", 2550)); // 25.50
        cart.update_quantity("2", 3);

        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price(), Decimal::new(17650, 2));
    }

    #[test]
    fn test_update_quantity_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(&product("1", 1000));
        cart.add(&product("2", 2000));

        cart.update_quantity("1", 0);

        assert_eq!(cart.lines().count(), 1);
        assert!(cart.lines().all(|line| line.product_id == "2"));

        cart.update_quantity("2", -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_id_is_ignored() {
        let mut cart = Cart::new();
        cart.add(&product("1", 1000));
        cart.update_quantity("99", 5);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(&product("1", 1000));
        cart.add(&product("2", 2000));

        cart.remove("1");
        assert_eq!(cart.lines().count(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_lines_keep_insertion_order_across_updates() {
        let mut cart = Cart::new();
        cart.add(&product("1", 1000));
        cart.add(&product("2", 2000));
        cart.add(&product("3", 3000));
        cart.update_quantity("1", 5);
        cart.remove("2");

        let ids: Vec<&str> = cart.lines().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
