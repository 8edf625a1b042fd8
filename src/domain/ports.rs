use super::beverage::{Additive, BaseDrink};
use super::money::Amount;
use super::payment::{Confirmation, Provider};

/// The uniform contract every checkout option is adapted to.
pub trait PaymentProcessor {
    fn provider(&self) -> Provider;
    fn process(&self, amount: Amount) -> Confirmation;
}

pub type PaymentProcessorBox = Box<dyn PaymentProcessor>;

/// A drink that can be priced and described, possibly wrapped in add-ons.
pub trait Beverage {
    fn base(&self) -> BaseDrink;

    /// Add-ons in the order they were applied, innermost first.
    fn additives(&self) -> &[Additive];

    /// Recomputed on every call by walking the wrapper layers.
    fn cost(&self) -> Amount;

    fn description(&self) -> String {
        let base = self.base().name();
        match self.additives() {
            [] => base.to_string(),
            [only] => format!("{base} with {}", only.label()),
            [others @ .., last] => {
                let others: Vec<&str> = others.iter().map(Additive::label).collect();
                format!("{base} with {} and {}", others.join(", "), last.label())
            }
        }
    }
}

pub type BeverageBox = Box<dyn Beverage>;
