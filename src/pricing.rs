//! Pricing
//!
//! Turns a cart snapshot plus an optional promo code into an itemized
//! [`OrderSummary`]. Computation is pure and keeps full decimal
//! precision; rounding to two places happens only when a summary is
//! prepared for display.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{cart::Cart, promos::PromoCode};

/// Fixed rates applied to every order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingRates {
    /// Tax applied to the subtotal, as a fraction.
    pub tax_rate: Decimal,

    /// Flat delivery fee charged whenever the cart is non-empty.
    pub delivery_fee: Decimal,
}

impl Default for PricingRates {
    /// 8% tax and a 5.00 flat delivery fee.
    fn default() -> Self {
        PricingRates {
            tax_rate: Decimal::new(8, 2),
            delivery_fee: Decimal::new(500, 2),
        }
    }
}

/// Itemized totals for an order, derived from cart and promo state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Sum of unit price times quantity over all items.
    pub subtotal: Decimal,

    /// Tax on the subtotal.
    pub tax_amount: Decimal,

    /// Delivery fee; zero for an empty cart.
    pub delivery_fee: Decimal,

    /// Promo discount on the subtotal; zero without an active promo.
    pub discount_amount: Decimal,

    /// `subtotal + tax + delivery - discount`.
    pub grand_total: Decimal,
}

impl OrderSummary {
    /// A summary with every amount at zero.
    pub fn zero() -> Self {
        OrderSummary {
            subtotal: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            delivery_fee: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            grand_total: Decimal::ZERO,
        }
    }

    /// Copy of this summary with every amount rounded to two decimal
    /// places, midpoint away from zero. For display only; keep the
    /// unrounded summary for any further arithmetic.
    pub fn rounded(&self) -> Self {
        OrderSummary {
            subtotal: round_display(self.subtotal),
            tax_amount: round_display(self.tax_amount),
            delivery_fee: round_display(self.delivery_fee),
            discount_amount: round_display(self.discount_amount),
            grand_total: round_display(self.grand_total),
        }
    }
}

/// Round a monetary amount for presentation.
fn round_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute the order summary for a cart and an optional active promo.
///
/// Pure and deterministic: identical inputs always produce identical
/// output, and the cart is not touched.
pub fn compute_summary(
    cart: &Cart,
    promo: Option<&PromoCode>,
    rates: &PricingRates,
) -> OrderSummary {
    let subtotal = cart.subtotal();
    let tax_amount = subtotal * rates.tax_rate;

    let delivery_fee = if subtotal > Decimal::ZERO {
        rates.delivery_fee
    } else {
        Decimal::ZERO
    };

    let discount_amount = promo.map_or(Decimal::ZERO, |promo| promo.discount_on(subtotal));

    OrderSummary {
        subtotal,
        tax_amount,
        delivery_fee,
        discount_amount,
        grand_total: subtotal + tax_amount + delivery_fee - discount_amount,
    }
}
