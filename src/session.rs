//! Ordering session
//!
//! A session owns one cart, the active promo and the orders placed so
//! far. Every cart mutation recomputes the order summary and hands it
//! back to the caller, so the UI layer never derives totals itself.
//! All operations are synchronous; a server adaptation needs nothing
//! more than one session (and thus one writer) per user.

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    cart::{Cart, CartChange, ItemId},
    checkout::{CheckoutForm, ValidationReport, validate},
    orders::{Order, OrderId},
    pricing::{OrderSummary, PricingRates, compute_summary},
    promos::{PromoBook, PromoCode},
};

/// Why a checkout submission was rejected.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The form violated one or more field rules.
    #[error("checkout form failed validation ({} field(s))", .0.len())]
    Invalid(ValidationReport),

    /// There is nothing in the cart to order.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,
}

/// Outcome of applying a promo code to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum PromoOutcome {
    /// The code resolved; this promo is now the active one.
    Applied {
        /// Canonical code as published.
        code: String,

        /// Discount rate unlocked.
        rate: Decimal,
    },

    /// The code is unknown. No discount applies; a previously active
    /// promo is cleared rather than kept.
    Invalid,
}

/// A cart mutation together with the summary recomputed after it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUpdate {
    /// What happened to the touched item.
    pub change: CartChange,

    /// Totals after the mutation.
    pub summary: OrderSummary,
}

/// A single user's shopping session.
#[derive(Debug)]
pub struct OrderSession {
    cart: Cart,
    rates: PricingRates,
    promos: PromoBook,
    active_promo: Option<PromoCode>,
    orders: Vec<Order>,
    next_order: u32,
}

impl OrderSession {
    /// Create a session with the given promo book and rates.
    pub fn new(promos: PromoBook, rates: PricingRates) -> Self {
        OrderSession {
            cart: Cart::new(),
            rates,
            promos,
            active_promo: None,
            orders: Vec::new(),
            next_order: 1,
        }
    }

    /// The live cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The promo currently applied, if any.
    pub fn active_promo(&self) -> Option<&PromoCode> {
        self.active_promo.as_ref()
    }

    /// Current totals for the cart and active promo.
    pub fn summary(&self) -> OrderSummary {
        compute_summary(&self.cart, self.active_promo.as_ref(), &self.rates)
    }

    /// Add an item to the cart. See [`Cart::add`] for the clamping and
    /// idempotency rules.
    pub fn add_item(
        &mut self,
        id: ItemId,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) -> SessionUpdate {
        let quantity = self.cart.add(id, name, unit_price, quantity);

        SessionUpdate {
            change: CartChange::Updated { quantity },
            summary: self.summary(),
        }
    }

    /// Change an item's quantity; zero removes it.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: u32) -> SessionUpdate {
        let change = self.cart.set_quantity(id, quantity);

        SessionUpdate {
            change,
            summary: self.summary(),
        }
    }

    /// Remove an item outright.
    pub fn remove_item(&mut self, id: &ItemId) -> SessionUpdate {
        self.cart.remove(id);

        SessionUpdate {
            change: CartChange::Removed,
            summary: self.summary(),
        }
    }

    /// Apply entered promo text. A resolved code replaces any earlier
    /// promo; at most one is ever active. Unknown text clears the
    /// active promo and reports [`PromoOutcome::Invalid`] so the UI
    /// can show a message, but it is not an error.
    pub fn apply_promo(&mut self, entered: &str) -> PromoOutcome {
        match self.promos.resolve(entered) {
            Some(promo) => {
                let outcome = PromoOutcome::Applied {
                    code: promo.code.clone(),
                    rate: promo.rate,
                };
                self.active_promo = Some(promo.clone());
                outcome
            }
            None => {
                self.active_promo = None;
                PromoOutcome::Invalid
            }
        }
    }

    /// Validate the form and place an order from the current cart.
    ///
    /// The order snapshots the cart items and the charged summary; the
    /// live cart is left untouched and later edits do not affect the
    /// placed order.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::Invalid`]: the form violated field rules.
    /// - [`CheckoutError::EmptyCart`]: the cart has no items.
    pub fn checkout(&mut self, form: &CheckoutForm) -> Result<&Order, CheckoutError> {
        self.checkout_at(form, Timestamp::now())
    }

    /// [`OrderSession::checkout`] with an explicit placement time.
    ///
    /// # Errors
    ///
    /// Same as [`OrderSession::checkout`].
    pub fn checkout_at(
        &mut self,
        form: &CheckoutForm,
        placed_at: Timestamp,
    ) -> Result<&Order, CheckoutError> {
        let report = validate(form);
        if !report.is_valid() {
            return Err(CheckoutError::Invalid(report));
        }

        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let id = OrderId::new(self.next_order);
        self.next_order += 1;

        let order = Order::place(id, self.cart.snapshot(), self.summary(), placed_at);
        self.orders.push(order);

        let Some(order) = self.orders.last() else {
            unreachable!("an order was pushed on the line above")
        };

        Ok(order)
    }

    /// Orders placed in this session, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Look up a placed order for a delivery-status update.
    pub fn order_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.iter_mut().find(|order| order.id() == id)
    }
}

impl Default for OrderSession {
    /// A session with the standing promos and default rates.
    fn default() -> Self {
        OrderSession::new(PromoBook::default(), PricingRates::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::cart::CartChange;
    use crate::checkout::FormField;

    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            full_name: "John Doe".into(),
            address: "123 Main St".into(),
            city: "Anytown".into(),
            postal_code: "12345".into(),
            phone: "+15551234567".into(),
            delivery_option: "express".into(),
            payment_method: "paypal".into(),
            ..CheckoutForm::default()
        }
    }

    fn session_with_pizza() -> OrderSession {
        let mut session = OrderSession::default();
        session.add_item(ItemId::from("m1"), "Margherita Pizza", Decimal::new(1299, 2), 2);
        session
    }

    #[test]
    fn mutations_return_fresh_summaries() {
        let mut session = OrderSession::default();

        let update = session.add_item(
            ItemId::from("m1"),
            "Margherita Pizza",
            Decimal::new(1299, 2),
            2,
        );
        assert_eq!(update.summary.subtotal, Decimal::new(2598, 2));

        let update = session.set_quantity(&ItemId::from("m1"), 3);
        assert_eq!(update.change, CartChange::Updated { quantity: 3 });
        assert_eq!(update.summary.subtotal, Decimal::new(3897, 2));

        let update = session.remove_item(&ItemId::from("m1"));
        assert_eq!(update.change, CartChange::Removed);
        assert_eq!(update.summary, OrderSummary::zero());
    }

    #[test]
    fn applying_a_promo_discounts_the_summary() {
        let mut session = session_with_pizza();

        let outcome = session.apply_promo("save10");

        assert_eq!(
            outcome,
            PromoOutcome::Applied {
                code: "SAVE10".into(),
                rate: Decimal::new(10, 2),
            }
        );
        assert_eq!(session.summary().discount_amount, Decimal::new(2598, 3));
    }

    #[test]
    fn invalid_promo_clears_the_active_one() {
        let mut session = session_with_pizza();
        session.apply_promo("SAVE10");

        let outcome = session.apply_promo("SAVE99");

        assert_eq!(outcome, PromoOutcome::Invalid);
        assert!(session.active_promo().is_none());
        assert_eq!(session.summary().discount_amount, Decimal::ZERO);
    }

    #[test]
    fn promos_replace_rather_than_stack() {
        let mut session = session_with_pizza();
        session.apply_promo("SAVE10");
        session.apply_promo("SAVE10");

        // Still a single 10% discount.
        assert_eq!(session.summary().discount_amount, Decimal::new(2598, 3));
    }

    #[test]
    fn checkout_rejects_invalid_form() {
        let mut session = session_with_pizza();
        let form = CheckoutForm {
            postal_code: "1234".into(),
            ..valid_form()
        };

        let result = session.checkout_at(&form, Timestamp::UNIX_EPOCH);

        match result {
            Err(CheckoutError::Invalid(report)) => {
                assert!(report.error(FormField::PostalCode).is_some());
            }
            other => panic!("expected Invalid error, got {other:?}"),
        }
        assert!(session.orders().is_empty());
    }

    #[test]
    fn checkout_rejects_empty_cart() {
        let mut session = OrderSession::default();

        let result = session.checkout_at(&valid_form(), Timestamp::UNIX_EPOCH);

        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
    }

    #[test]
    fn checkout_snapshots_cart_and_summary() {
        let mut session = session_with_pizza();
        session.apply_promo("SAVE10");

        let summary_at_placement = session.summary();
        let order_id = session
            .checkout_at(&valid_form(), Timestamp::UNIX_EPOCH)
            .map(Order::id);

        assert_eq!(order_id.as_ref().ok().map(ToString::to_string).as_deref(), Some("ORD00001"));

        // Later cart edits must not touch the placed order.
        session.set_quantity(&ItemId::from("m1"), 9);

        let order = session.orders().first().cloned();
        assert_eq!(
            order.as_ref().map(|order| order.items().to_vec()),
            Some(vec![crate::cart::CartItem {
                id: ItemId::from("m1"),
                name: "Margherita Pizza".into(),
                unit_price: Decimal::new(1299, 2),
                quantity: 2,
            }])
        );
        assert_eq!(order.map(|order| *order.summary()), Some(summary_at_placement));
    }

    #[test]
    fn order_ids_are_sequential() {
        let mut session = session_with_pizza();

        let first = session
            .checkout_at(&valid_form(), Timestamp::UNIX_EPOCH)
            .map(Order::id);
        let second = session
            .checkout_at(&valid_form(), Timestamp::UNIX_EPOCH)
            .map(Order::id);

        assert_eq!(first.ok().map(|id| id.to_string()).as_deref(), Some("ORD00001"));
        assert_eq!(second.ok().map(|id| id.to_string()).as_deref(), Some("ORD00002"));
    }

    #[test]
    fn order_mut_finds_placed_order() {
        let mut session = session_with_pizza();
        let id = session
            .checkout_at(&valid_form(), Timestamp::UNIX_EPOCH)
            .map(Order::id);

        let Ok(id) = id else {
            panic!("checkout failed");
        };

        let order = session.order_mut(id);
        assert!(order.is_some());
        assert!(session.order_mut(OrderId::new(999)).is_none());
    }
}
