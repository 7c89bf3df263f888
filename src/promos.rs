//! Promo codes
//!
//! A promo code maps a user-entered string to a percentage discount on
//! the order subtotal. Lookup is ASCII case-insensitive and otherwise
//! exact: no trimming, no prefix matching. An unknown code resolves to
//! no discount rather than an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A discount rule unlocked by entering its code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoCode {
    /// Canonical code as published, e.g. `SAVE10`.
    pub code: String,

    /// Fraction of the subtotal discounted, in `0..=1`.
    pub rate: Decimal,
}

impl PromoCode {
    /// Create a promo code.
    pub fn new(code: impl Into<String>, rate: Decimal) -> Self {
        PromoCode {
            code: code.into(),
            rate,
        }
    }

    /// Discount amount this code yields on a subtotal.
    pub fn discount_on(&self, subtotal: Decimal) -> Decimal {
        subtotal * self.rate
    }
}

/// The set of promo codes known to the storefront.
#[derive(Debug, Clone)]
pub struct PromoBook {
    codes: Vec<PromoCode>,
}

impl PromoBook {
    /// Create a book from a list of codes.
    pub fn new(codes: impl Into<Vec<PromoCode>>) -> Self {
        PromoBook {
            codes: codes.into(),
        }
    }

    /// Resolve entered text to a known code.
    ///
    /// Matching is ASCII case-insensitive and exact; surrounding
    /// whitespace is significant and makes the lookup fail. Unknown
    /// text resolves to `None`, which callers treat as "no discount".
    pub fn resolve(&self, entered: &str) -> Option<&PromoCode> {
        self.codes
            .iter()
            .find(|promo| promo.code.eq_ignore_ascii_case(entered))
    }

    /// Iterate over the known codes.
    pub fn iter(&self) -> impl Iterator<Item = &PromoCode> {
        self.codes.iter()
    }
}

impl Default for PromoBook {
    /// The storefront's standing promotion: `SAVE10` for 10% off.
    fn default() -> Self {
        PromoBook::new([PromoCode::new("SAVE10", Decimal::new(10, 2))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_matches_exact_code() {
        let book = PromoBook::default();

        assert!(book.resolve("SAVE10").is_some());
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let book = PromoBook::default();

        assert!(book.resolve("save10").is_some());
        assert!(book.resolve("Save10").is_some());
    }

    #[test]
    fn resolve_does_not_trim() {
        let book = PromoBook::default();

        assert!(book.resolve(" Save10").is_none());
        assert!(book.resolve("SAVE10 ").is_none());
    }

    #[test]
    fn resolve_rejects_partial_matches() {
        let book = PromoBook::default();

        assert!(book.resolve("SAVE").is_none());
        assert!(book.resolve("SAVE100").is_none());
        assert!(book.resolve("").is_none());
    }

    #[test]
    fn discount_on_applies_rate_to_subtotal() {
        let promo = PromoCode::new("SAVE10", Decimal::new(10, 2));

        assert_eq!(
            promo.discount_on(Decimal::new(3148, 2)),
            Decimal::new(31480, 4)
        );
    }
}
