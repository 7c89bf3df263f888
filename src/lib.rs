//! FoodFleet
//!
//! FoodFleet is the core ordering logic of a food-delivery storefront:
//! cart management, order pricing, promo codes, checkout validation
//! and delivery progress tracking. It holds no UI concerns; callers
//! feed it plain data and render the structured results it returns.

pub mod cart;
pub mod checkout;
pub mod fixtures;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod progress;
pub mod promos;
pub mod quantity;
pub mod receipt;
pub mod session;
