//! Cart
//!
//! The cart is an ordered mapping from item id to [`CartItem`]. Keys
//! are unique and every stored item has a quantity of at least one;
//! setting a quantity to zero removes the item instead of storing it.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::quantity::QuantityBounds;

/// Identity of a menu item within a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    /// Create an item id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId(id.to_owned())
    }
}

/// A single line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Menu item identity.
    pub id: ItemId,

    /// Display name.
    pub name: String,

    /// Price for a single unit.
    pub unit_price: Decimal,

    /// Units of this item in the cart; always at least one.
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line: unit price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Outcome of a quantity update on the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// The item remains in the cart with the given quantity.
    Updated {
        /// Quantity after clamping.
        quantity: u32,
    },

    /// The item was removed (quantity clamped to zero, or explicit
    /// removal).
    Removed,
}

/// The items a user intends to purchase in the current session.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: IndexMap<ItemId, CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Add an item with an absolute quantity, clamped to the pre-add
    /// bounds.
    ///
    /// If the item is already present the existing quantity wins and
    /// the call is a no-op, so repeated "add to cart" clicks for the
    /// same choice are idempotent. Use [`Cart::set_quantity`] to change
    /// a quantity that is already in the cart.
    ///
    /// Returns the quantity the item holds after the call.
    pub fn add(
        &mut self,
        id: ItemId,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) -> u32 {
        if let Some(existing) = self.items.get(&id) {
            return existing.quantity;
        }

        let quantity = QuantityBounds::pre_add().clamp(quantity);
        self.items.insert(
            id.clone(),
            CartItem {
                id,
                name: name.into(),
                unit_price,
                quantity,
            },
        );

        quantity
    }

    /// Set the quantity of an item, clamped to the cart-edit bounds.
    ///
    /// A clamped result of zero removes the item. Setting a quantity
    /// for an absent id is a no-op reported as [`CartChange::Removed`].
    pub fn set_quantity(&mut self, id: &ItemId, quantity: u32) -> CartChange {
        let quantity = QuantityBounds::cart_edit().clamp(quantity);

        if quantity == 0 {
            self.items.shift_remove(id);
            return CartChange::Removed;
        }

        match self.items.get_mut(id) {
            Some(item) => {
                item.quantity = quantity;
                CartChange::Updated { quantity }
            }
            None => CartChange::Removed,
        }
    }

    /// Remove an item unconditionally. Removing an absent id is a
    /// no-op.
    pub fn remove(&mut self, id: &ItemId) {
        self.items.shift_remove(id);
    }

    /// Get an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&CartItem> {
        self.items.get(id)
    }

    /// Iterate over items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    /// Number of distinct items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all items.
    pub fn total_quantity(&self) -> u32 {
        self.items.values().map(|item| item.quantity).sum()
    }

    /// Sum of line totals over all items.
    pub fn subtotal(&self) -> Decimal {
        self.items.values().map(CartItem::line_total).sum()
    }

    /// Clone the items in insertion order, for an order snapshot.
    pub fn snapshot(&self) -> Vec<CartItem> {
        self.items.values().cloned().collect()
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
