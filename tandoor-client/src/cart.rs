//! Cart engine
//!
//! Client-local cart used by the storefront. A line is identified by
//! the `(item id, portion)` pair; adding the same pair again increments
//! its quantity instead of creating a new line. Each line snapshots the
//! item name and the selected portion's price at add time, so later
//! catalog edits never change a cart already in progress.
//!
//! `total` and `item_count` are derived, recomputed after every
//! mutation, and never stored independently of the lines.

use serde::{Deserialize, Serialize};
use shared::models::{MenuItem, OrderLine, Portion};
use std::path::PathBuf;

use crate::{ClientError, ClientResult};

/// One cart line: a menu item at a chosen portion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    pub portion: Portion,
    /// Per-unit price charged, fixed when the line was created
    pub unit_price: u32,
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity; `None` when the product does not fit
    /// in a `u32`
    pub fn line_total(&self) -> Option<u32> {
        self.unit_price.checked_mul(self.quantity)
    }
}

fn amount_overflow() -> ClientError {
    ClientError::Validation("Cart total exceeds the maximum amount".to_string())
}

/// The cart: lines plus derived totals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub lines: Vec<CartLine>,
    /// Sum of line totals, in whole rupees
    pub total: u32,
    /// Sum of line quantities
    pub item_count: u32,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `item` at `portion`. Merges into an existing
    /// line when the `(item id, portion)` pair is already in the cart.
    pub fn add_item(&mut self, item: &MenuItem, portion: Portion) -> ClientResult<()> {
        let unit_price = item
            .prices
            .price_of(portion)
            .ok_or_else(|| ClientError::PortionNotOffered {
                item: item.name.clone(),
                portion,
            })?;

        if let Some(idx) = self
            .lines
            .iter()
            .position(|l| l.item_id == item.id && l.portion == portion)
        {
            let bumped = self.lines[idx]
                .quantity
                .checked_add(1)
                .ok_or_else(amount_overflow)?;
            let prev = std::mem::replace(&mut self.lines[idx].quantity, bumped);
            if let Err(e) = self.recompute() {
                self.lines[idx].quantity = prev;
                return Err(e);
            }
        } else {
            self.lines.push(CartLine {
                item_id: item.id.clone(),
                name: item.name.clone(),
                portion,
                unit_price,
                quantity: 1,
            });
            if let Err(e) = self.recompute() {
                self.lines.pop();
                return Err(e);
            }
        }

        Ok(())
    }

    /// Set the quantity of a line; zero removes it. Unknown lines are
    /// ignored. The cart is left untouched when the new totals would
    /// overflow.
    pub fn set_quantity(
        &mut self,
        item_id: &str,
        portion: Portion,
        quantity: u32,
    ) -> ClientResult<()> {
        if quantity == 0 {
            self.remove_item(item_id, portion);
            return Ok(());
        }
        if let Some(idx) = self
            .lines
            .iter()
            .position(|l| l.item_id == item_id && l.portion == portion)
        {
            let prev = std::mem::replace(&mut self.lines[idx].quantity, quantity);
            if let Err(e) = self.recompute() {
                self.lines[idx].quantity = prev;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Remove a line regardless of its quantity
    pub fn remove_item(&mut self, item_id: &str, portion: Portion) {
        self.lines
            .retain(|l| !(l.item_id == item_id && l.portion == portion));
        // Removing lines only shrinks totals that already fit
        self.recompute().ok();
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.total = 0;
        self.item_count = 0;
    }

    /// The checkout snapshot submitted as order `items`
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.lines
            .iter()
            .map(|l| OrderLine {
                name: l.name.clone(),
                price: l.unit_price,
                quantity: l.quantity,
                portion: l.portion,
            })
            .collect()
    }

    fn recompute(&mut self) -> ClientResult<()> {
        let mut total: u32 = 0;
        let mut item_count: u32 = 0;
        for line in &self.lines {
            let line_total = line.line_total().ok_or_else(amount_overflow)?;
            total = total.checked_add(line_total).ok_or_else(amount_overflow)?;
            item_count = item_count
                .checked_add(line.quantity)
                .ok_or_else(amount_overflow)?;
        }
        self.total = total;
        self.item_count = item_count;
        Ok(())
    }
}

/// Where the storefront keeps the in-progress cart between page loads
pub trait CartStore {
    fn load(&self) -> ClientResult<Cart>;
    fn save(&mut self, cart: &Cart) -> ClientResult<()>;
    fn clear(&mut self) -> ClientResult<()>;
}

/// Keeps the cart in memory only; gone when the process exits
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    cart: Option<Cart>,
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> ClientResult<Cart> {
        Ok(self.cart.clone().unwrap_or_default())
    }

    fn save(&mut self, cart: &Cart) -> ClientResult<()> {
        self.cart = Some(cart.clone());
        Ok(())
    }

    fn clear(&mut self) -> ClientResult<()> {
        self.cart = None;
        Ok(())
    }
}

/// Persists the cart as a JSON file
#[derive(Debug, Clone)]
pub struct FileCartStore {
    path: PathBuf,
}

impl FileCartStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStore for FileCartStore {
    fn load(&self) -> ClientResult<Cart> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Cart::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, cart: &Cart) -> ClientResult<()> {
        std::fs::write(&self.path, serde_json::to_string(cart)?)?;
        Ok(())
    }

    fn clear(&mut self) -> ClientResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ItemPrices;

    fn paneer_tikka() -> MenuItem {
        MenuItem {
            id: "menu_items:paneer".to_string(),
            category_id: "categories:starters".to_string(),
            name: "Paneer Tikka".to_string(),
            description: None,
            image_url: None,
            is_vegetarian: true,
            is_available: true,
            prices: ItemPrices {
                full: 280,
                half: Some(160),
                quarter: None,
            },
        }
    }

    #[test]
    fn same_item_different_portions_are_separate_lines() {
        let item = paneer_tikka();
        let mut cart = Cart::new();

        cart.add_item(&item, Portion::Half).unwrap();
        cart.add_item(&item, Portion::Half).unwrap();
        cart.add_item(&item, Portion::Full).unwrap();

        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.total, 160 * 2 + 280);
        assert_eq!(cart.item_count, 3);
    }

    #[test]
    fn add_merges_into_existing_line() {
        let item = paneer_tikka();
        let mut cart = Cart::new();

        cart.add_item(&item, Portion::Full).unwrap();
        cart.add_item(&item, Portion::Full).unwrap();

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.total, 560);
    }

    #[test]
    fn unoffered_portion_is_rejected() {
        let item = paneer_tikka();
        let mut cart = Cart::new();

        let err = cart.add_item(&item, Portion::Quarter).unwrap_err();
        assert!(matches!(err, ClientError::PortionNotOffered { .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn zero_quantity_removes_the_line() {
        let item = paneer_tikka();
        let mut cart = Cart::new();

        cart.add_item(&item, Portion::Half).unwrap();
        cart.set_quantity(&item.id, Portion::Half, 5).unwrap();
        assert_eq!(cart.total, 800);
        assert_eq!(cart.item_count, 5);

        cart.set_quantity(&item.id, Portion::Half, 0).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total, 0);
        assert_eq!(cart.item_count, 0);
    }

    #[test]
    fn snapshot_price_survives_catalog_changes() {
        let mut item = paneer_tikka();
        let mut cart = Cart::new();

        cart.add_item(&item, Portion::Full).unwrap();
        // Catalog price changes after the line was added
        item.prices.full = 999;
        cart.add_item(&item, Portion::Full).unwrap();

        // The merged line keeps its original snapshot
        assert_eq!(cart.lines[0].unit_price, 280);
        assert_eq!(cart.total, 560);
    }

    #[test]
    fn order_lines_mirror_the_cart() {
        let item = paneer_tikka();
        let mut cart = Cart::new();
        cart.add_item(&item, Portion::Half).unwrap();
        cart.add_item(&item, Portion::Half).unwrap();
        cart.add_item(&item, Portion::Full).unwrap();

        let lines = cart.order_lines();
        assert_eq!(lines.len(), 2);
        let total: u32 = lines.iter().map(|l| l.line_total().unwrap()).sum();
        assert_eq!(total, cart.total);
        assert_eq!(total, 600);
    }

    #[test]
    fn overflowing_quantity_leaves_the_cart_unchanged() {
        let mut item = paneer_tikka();
        item.prices.full = 100_000;
        let mut cart = Cart::new();
        cart.add_item(&item, Portion::Full).unwrap();

        let err = cart
            .set_quantity(&item.id, Portion::Full, 100_000)
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(cart.lines[0].quantity, 1);
        assert_eq!(cart.total, 100_000);
        assert_eq!(cart.item_count, 1);
    }

    #[test]
    fn clear_empties_everything() {
        let item = paneer_tikka();
        let mut cart = Cart::new();
        cart.add_item(&item, Portion::Full).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total, 0);
        assert_eq!(cart.item_count, 0);
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileCartStore::new(dir.path().join("cart.json"));

        // Missing file loads an empty cart
        assert!(store.load().unwrap().is_empty());

        let item = paneer_tikka();
        let mut cart = Cart::new();
        cart.add_item(&item, Portion::Full).unwrap();
        store.save(&cart).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, cart);

        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
