//! Fixtures
//!
//! YAML fixture files for menus and promo codes, used to seed demo
//! sessions and tests without a real backend. Prices and rates are
//! written as decimal strings and parsed strictly.

use std::{path::Path, str::FromStr};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    cart::{CartItem, ItemId},
    promos::{PromoBook, PromoCode},
};

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files.
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format.
    #[error("Invalid price {0:?}: {1}")]
    InvalidPrice(String, rust_decimal::Error),

    /// Invalid discount rate format or range.
    #[error("Invalid discount rate {0:?}")]
    InvalidRate(String),
}

/// One menu item as written in a fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemFixture {
    /// Menu item id, e.g. `m1`.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price as a decimal string, e.g. `"12.99"`.
    pub price: String,
}

/// A restaurant menu fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuFixture {
    /// Restaurant name.
    pub restaurant: String,

    /// Items on the menu.
    pub items: Vec<MenuItemFixture>,
}

impl MenuFixture {
    /// Load a menu fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// - [`FixtureError::Io`]: the file could not be read.
    /// - [`FixtureError::Yaml`]: the file is not valid fixture YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_norway::from_str(&text)?)
    }

    /// Convert the menu into cart items at quantity one, ready for
    /// [`Cart::add`](crate::cart::Cart::add).
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidPrice`] if a price string does
    /// not parse as a decimal.
    pub fn cart_items(&self) -> Result<Vec<CartItem>, FixtureError> {
        self.items
            .iter()
            .map(|item| {
                Ok(CartItem {
                    id: ItemId::new(&item.id),
                    name: item.name.clone(),
                    unit_price: parse_price(&item.price)?,
                    quantity: 1,
                })
            })
            .collect()
    }
}

/// One promo code as written in a fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct PromoCodeFixture {
    /// Canonical code.
    pub code: String,

    /// Discount rate as a decimal string in `0..=1`, e.g. `"0.10"`.
    pub rate: String,
}

/// A promo book fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct PromosFixture {
    /// Known codes.
    pub codes: Vec<PromoCodeFixture>,
}

impl PromosFixture {
    /// Load a promos fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// - [`FixtureError::Io`]: the file could not be read.
    /// - [`FixtureError::Yaml`]: the file is not valid fixture YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_norway::from_str(&text)?)
    }

    /// Build the promo book described by this fixture.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidRate`] if a rate does not parse
    /// or lies outside `0..=1`.
    pub fn promo_book(&self) -> Result<PromoBook, FixtureError> {
        let codes = self
            .codes
            .iter()
            .map(|promo| {
                let rate = Decimal::from_str(&promo.rate)
                    .map_err(|_err| FixtureError::InvalidRate(promo.rate.clone()))?;

                if rate < Decimal::ZERO || rate > Decimal::ONE {
                    return Err(FixtureError::InvalidRate(promo.rate.clone()));
                }

                Ok(PromoCode::new(&promo.code, rate))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PromoBook::new(codes))
    }
}

/// Parse a price string into a decimal amount.
fn parse_price(price: &str) -> Result<Decimal, FixtureError> {
    Decimal::from_str(price).map_err(|err| FixtureError::InvalidPrice(price.to_owned(), err))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const MENU_YAML: &str = "\
restaurant: Pizza Palace
items:
  - id: m1
    name: Margherita Pizza
    price: \"12.99\"
  - id: m3
    name: Garlic Bread
    price: \"5.50\"
";

    const PROMOS_YAML: &str = "\
codes:
  - code: SAVE10
    rate: \"0.10\"
";

    #[test]
    fn menu_fixture_parses_into_cart_items() -> TestResult {
        let fixture: MenuFixture = serde_norway::from_str(MENU_YAML)?;

        let items = fixture.cart_items()?;

        assert_eq!(fixture.restaurant, "Pizza Palace");
        assert_eq!(items.len(), 2);
        assert_eq!(
            items.first().map(|item| item.unit_price),
            Some(Decimal::new(1299, 2))
        );
        assert!(items.iter().all(|item| item.quantity == 1));

        Ok(())
    }

    #[test]
    fn promos_fixture_builds_book() -> TestResult {
        let fixture: PromosFixture = serde_norway::from_str(PROMOS_YAML)?;

        let book = fixture.promo_book()?;

        assert!(book.resolve("save10").is_some());

        Ok(())
    }

    #[test]
    fn invalid_price_is_reported() -> TestResult {
        let fixture: MenuFixture = serde_norway::from_str(
            "restaurant: X\nitems:\n  - id: m1\n    name: Pizza\n    price: twelve\n",
        )?;

        let result = fixture.cart_items();

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_, _))));

        Ok(())
    }

    #[test]
    fn out_of_range_rate_is_reported() -> TestResult {
        let fixture: PromosFixture =
            serde_norway::from_str("codes:\n  - code: MEGA\n    rate: \"1.5\"\n")?;

        let result = fixture.promo_book();

        assert!(matches!(result, Err(FixtureError::InvalidRate(_))));

        Ok(())
    }

    #[test]
    fn load_reads_fixture_files() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("menu.yaml");
        std::fs::write(&path, MENU_YAML)?;

        let fixture = MenuFixture::load(&path)?;

        assert_eq!(fixture.items.len(), 2);

        Ok(())
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = MenuFixture::load("/nonexistent/menu.yaml");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }
}
