use super::menu::parse_choice;
use crate::domain::payment::{Confirmation, PaymentRequest};
use crate::domain::ports::PaymentProcessorBox;
use crate::error::Result;
use crate::infrastructure::providers::{
    HalykPaymentAdapter, HalykPaymentService, KaspiPaymentAdapter, KaspiPaymentService,
    PayPalPaymentProcessor, StripePaymentAdapter, StripePaymentService,
};
use crate::interfaces::console::Console;
use tracing::{debug, warn};

const PAYMENT_MENU: [&str; 4] = ["1 - PayPal", "2 - Stripe", "3 - Kaspi", "4 - Halyk"];

/// Builds the processor behind a menu choice.
///
/// Unknown or unparseable choices fall back to PayPal.
pub fn select_processor(choice: Option<i64>) -> PaymentProcessorBox {
    let processor: PaymentProcessorBox = match choice {
        Some(1) => Box::new(PayPalPaymentProcessor),
        Some(2) => Box::new(StripePaymentAdapter::new(StripePaymentService)),
        Some(3) => Box::new(KaspiPaymentAdapter::new(KaspiPaymentService)),
        Some(4) => Box::new(HalykPaymentAdapter::new(HalykPaymentService)),
        other => {
            warn!(choice = ?other, "unknown payment choice, falling back to PayPal");
            Box::new(PayPalPaymentProcessor)
        }
    };
    debug!(provider = %processor.provider(), "payment processor selected");
    processor
}

/// Runs the checkout dialogue once: amount, provider, confirmation.
///
/// A closed stdin reads as an amount of `0` and as menu choice `1`.
pub fn run_payment<C: Console + ?Sized>(console: &mut C) -> Result<Confirmation> {
    let amount_input = console
        .prompt("Enter payment amount: ")?
        .unwrap_or_else(|| "0".to_string());
    let request = PaymentRequest::parse(&amount_input)?;

    console.write_line("")?;
    console.write_line("Choose a payment method:")?;
    for entry in PAYMENT_MENU {
        console.write_line(entry)?;
    }
    let choice = console
        .prompt("Your choice: ")?
        .map_or(Some(1), |input| parse_choice(&input));

    let processor = select_processor(choice);
    console.write_line("")?;
    console.write_line("")?;
    let confirmation = processor.process(request.amount);
    console.show_confirmation(&confirmation)?;
    console.write_line("")?;

    Ok(confirmation)
}
