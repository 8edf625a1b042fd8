//! Application layer driving the two console dialogues.
//!
//! `payment` picks a processor from a menu and runs it once; `beverage`
//! builds a drink layer by layer from repeated add-on choices. Both talk to
//! the user only through the `Console` trait.

pub mod beverage;
pub mod menu;
pub mod payment;
