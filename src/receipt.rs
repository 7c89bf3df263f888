//! Receipt
//!
//! Presentation-layer totals for an order summary. Amounts are rounded
//! to minor units here and nowhere earlier, so pricing arithmetic
//! keeps full precision while the receipt shows money as charged.

use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::ToPrimitive,
};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::pricing::OrderSummary;

/// Errors while building or reading a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// An amount could not be represented in minor units.
    #[error("amount {0} cannot be represented in minor currency units")]
    AmountOverflow(Decimal),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Displayable totals for one order, in a single currency.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    subtotal: Money<'a, Currency>,
    tax: Money<'a, Currency>,
    delivery_fee: Money<'a, Currency>,
    discount: Money<'a, Currency>,
    grand_total: Money<'a, Currency>,
}

impl<'a> Receipt<'a> {
    /// Build a receipt from a summary, rounding each amount to two
    /// places (midpoint away from zero) in the given currency.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::AmountOverflow`] if an amount does not
    /// fit in minor units.
    pub fn from_summary(
        summary: &OrderSummary,
        currency: &'static Currency,
    ) -> Result<Self, ReceiptError> {
        Ok(Receipt {
            subtotal: to_money(summary.subtotal, currency)?,
            tax: to_money(summary.tax_amount, currency)?,
            delivery_fee: to_money(summary.delivery_fee, currency)?,
            discount: to_money(summary.discount_amount, currency)?,
            grand_total: to_money(summary.grand_total, currency)?,
        })
    }

    /// Subtotal line.
    pub fn subtotal(&self) -> &Money<'a, Currency> {
        &self.subtotal
    }

    /// Tax line.
    pub fn tax(&self) -> &Money<'a, Currency> {
        &self.tax
    }

    /// Delivery fee line.
    pub fn delivery_fee(&self) -> &Money<'a, Currency> {
        &self.delivery_fee
    }

    /// Discount line (shown as a deduction).
    pub fn discount(&self) -> &Money<'a, Currency> {
        &self.discount
    }

    /// The amount charged.
    pub fn grand_total(&self) -> &Money<'a, Currency> {
        &self.grand_total
    }

    /// What the promo saved: the discount line.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if money arithmetic fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        let gross = self
            .subtotal
            .add(self.tax)?
            .add(self.delivery_fee)?;

        gross.sub(self.grand_total)
    }
}

/// Round to two places and convert to minor-unit money.
fn to_money(amount: Decimal, currency: &'static Currency) -> Result<Money<'_, Currency>, ReceiptError> {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let minor = rounded
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.to_i64())
        .ok_or(ReceiptError::AmountOverflow(amount))?;

    Ok(Money::from_minor(minor, currency))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::{
        cart::{Cart, ItemId},
        pricing::{PricingRates, compute_summary},
        promos::PromoCode,
    };

    use super::*;

    fn spec_summary() -> OrderSummary {
        let mut cart = Cart::new();
        cart.add(ItemId::from("m1"), "Margherita Pizza", Decimal::new(1299, 2), 2);
        cart.add(ItemId::from("m3"), "Garlic Bread", Decimal::new(550, 2), 1);

        let promo = PromoCode::new("SAVE10", Decimal::new(10, 2));
        compute_summary(&cart, Some(&promo), &PricingRates::default())
    }

    #[test]
    fn receipt_rounds_each_line_to_minor_units() -> TestResult {
        let receipt = Receipt::from_summary(&spec_summary(), iso::USD)?;

        assert_eq!(receipt.subtotal(), &Money::from_minor(3148, iso::USD));
        assert_eq!(receipt.tax(), &Money::from_minor(252, iso::USD));
        assert_eq!(receipt.delivery_fee(), &Money::from_minor(500, iso::USD));
        assert_eq!(receipt.discount(), &Money::from_minor(315, iso::USD));
        assert_eq!(receipt.grand_total(), &Money::from_minor(3585, iso::USD));

        Ok(())
    }

    #[test]
    fn savings_matches_discount_line() -> TestResult {
        let receipt = Receipt::from_summary(&spec_summary(), iso::USD)?;

        assert_eq!(receipt.savings()?, Money::from_minor(315, iso::USD));

        Ok(())
    }

    #[test]
    fn overflowing_amount_is_an_error() {
        let summary = OrderSummary {
            subtotal: Decimal::MAX,
            ..OrderSummary::zero()
        };

        let result = Receipt::from_summary(&summary, iso::USD);

        assert!(matches!(result, Err(ReceiptError::AmountOverflow(_))));
    }
}
