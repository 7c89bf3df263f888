//! Quantity bounds and parsing
//!
//! Quantities entered through steppers or free-text inputs are clamped
//! into a bounded range; text that fails to parse falls back to the
//! lower bound instead of surfacing an error.

/// Inclusive bounds for an item quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityBounds {
    /// Smallest accepted quantity.
    pub min: u32,

    /// Largest accepted quantity.
    pub max: u32,
}

impl QuantityBounds {
    /// Bounds for choosing a quantity before an item is in the cart.
    ///
    /// Zero is not selectable here; "none" is expressed by not adding
    /// the item at all.
    pub fn pre_add() -> Self {
        QuantityBounds { min: 1, max: 99 }
    }

    /// Bounds for editing a quantity already in the cart.
    ///
    /// Zero is allowed and means "remove the item".
    pub fn cart_edit() -> Self {
        QuantityBounds { min: 0, max: 99 }
    }

    /// Clamp a quantity into these bounds.
    pub fn clamp(&self, quantity: u32) -> u32 {
        quantity.clamp(self.min, self.max)
    }
}

/// Parse free-text quantity input, clamping into `bounds`.
///
/// Unparseable or negative text yields `bounds.min`; values above the
/// upper bound clamp down to `bounds.max`. This never fails.
pub fn parse_quantity(text: &str, bounds: QuantityBounds) -> u32 {
    match text.trim().parse::<u32>() {
        Ok(quantity) => bounds.clamp(quantity),
        Err(_) => bounds.min,
    }
}
