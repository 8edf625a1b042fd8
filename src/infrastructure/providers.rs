use crate::domain::money::Amount;
use crate::domain::payment::{Confirmation, Provider};
use crate::domain::ports::PaymentProcessor;
use rust_decimal::Decimal;

/// PayPal already speaks the processor contract and needs no adapter.
#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalPaymentProcessor;

impl PaymentProcessor for PayPalPaymentProcessor {
    fn provider(&self) -> Provider {
        Provider::PayPal
    }

    fn process(&self, amount: Amount) -> Confirmation {
        Confirmation::new(
            Provider::PayPal,
            format!("Payment of {amount} tg via PayPal completed successfully."),
        )
    }
}

/// Stripe's own client, with its own vocabulary.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripePaymentService;

impl StripePaymentService {
    pub fn make_transaction(&self, total_amount: Decimal) -> String {
        format!("Stripe: transaction for {total_amount} tg completed successfully.")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct KaspiPaymentService;

impl KaspiPaymentService {
    pub fn send_money(&self, amount: Decimal) -> String {
        format!("Kaspi: payment of {amount} tg processed via Kaspi.kz.")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HalykPaymentService;

impl HalykPaymentService {
    pub fn pay_with_card(&self, total: Decimal) -> String {
        format!("Halyk Bank: payment of {total} tg went through successfully.")
    }
}

/// Exposes [`StripePaymentService::make_transaction`] as a [`PaymentProcessor`].
#[derive(Debug, Default)]
pub struct StripePaymentAdapter {
    stripe: StripePaymentService,
}

impl StripePaymentAdapter {
    pub fn new(stripe: StripePaymentService) -> Self {
        Self { stripe }
    }
}

impl PaymentProcessor for StripePaymentAdapter {
    fn provider(&self) -> Provider {
        Provider::Stripe
    }

    fn process(&self, amount: Amount) -> Confirmation {
        Confirmation::new(Provider::Stripe, self.stripe.make_transaction(amount.into()))
    }
}

/// Exposes [`KaspiPaymentService::send_money`] as a [`PaymentProcessor`].
#[derive(Debug, Default)]
pub struct KaspiPaymentAdapter {
    kaspi: KaspiPaymentService,
}

impl KaspiPaymentAdapter {
    pub fn new(kaspi: KaspiPaymentService) -> Self {
        Self { kaspi }
    }
}

impl PaymentProcessor for KaspiPaymentAdapter {
    fn provider(&self) -> Provider {
        Provider::Kaspi
    }

    fn process(&self, amount: Amount) -> Confirmation {
        Confirmation::new(Provider::Kaspi, self.kaspi.send_money(amount.into()))
    }
}

/// Exposes [`HalykPaymentService::pay_with_card`] as a [`PaymentProcessor`].
#[derive(Debug, Default)]
pub struct HalykPaymentAdapter {
    halyk: HalykPaymentService,
}

impl HalykPaymentAdapter {
    pub fn new(halyk: HalykPaymentService) -> Self {
        Self { halyk }
    }
}

impl PaymentProcessor for HalykPaymentAdapter {
    fn provider(&self) -> Provider {
        Provider::Halyk
    }

    fn process(&self, amount: Amount) -> Confirmation {
        Confirmation::new(Provider::Halyk, self.halyk.pay_with_card(amount.into()))
    }
}
