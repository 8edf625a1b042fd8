//! Domain types for both demos: money, payment providers and beverages.
//!
//! The traits in [`ports`] are the seams the application layer works
//! against; concrete processors live in `infrastructure`.

pub mod beverage;
pub mod money;
pub mod payment;
pub mod ports;
