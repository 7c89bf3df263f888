//! FoodFleet prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartChange, CartItem, ItemId},
    checkout::{
        CheckoutForm, DeliveryOption, FormField, PaymentMethod, ValidationReport, validate,
    },
    fixtures::{FixtureError, MenuFixture, PromosFixture},
    orders::{Order, OrderId},
    pricing::{OrderSummary, PricingRates, compute_summary},
    progress::{Advance, OrderProgress, ProgressStep, STANDARD_STEPS, StepStatus},
    promos::{PromoBook, PromoCode},
    quantity::{QuantityBounds, parse_quantity},
    receipt::{Receipt, ReceiptError},
    session::{CheckoutError, OrderSession, PromoOutcome, SessionUpdate},
};
