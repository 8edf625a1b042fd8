use super::money::Amount;
use crate::error::Result;
use std::fmt;

/// The payment providers offered by the checkout menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    PayPal,
    Stripe,
    Kaspi,
    Halyk,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::PayPal,
        Provider::Stripe,
        Provider::Kaspi,
        Provider::Halyk,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Provider::PayPal => "PayPal",
            Provider::Stripe => "Stripe",
            Provider::Kaspi => "Kaspi",
            Provider::Halyk => "Halyk",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A request to pay a single amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentRequest {
    pub amount: Amount,
}

impl PaymentRequest {
    pub fn new(amount: Amount) -> Self {
        Self { amount }
    }

    /// Parses the amount a user typed at the prompt.
    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self::new(input.parse()?))
    }
}

/// The outcome of a processed payment, ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub provider: Provider,
    pub message: String,
}

impl Confirmation {
    pub fn new(provider: Provider, message: impl Into<String>) -> Self {
        Self {
            provider,
            message: message.into(),
        }
    }
}
