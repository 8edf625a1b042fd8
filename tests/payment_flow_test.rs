mod common;

use common::{run_scripted, script};
use patterns_demo::application::payment::run_payment;
use patterns_demo::domain::payment::Provider;

#[test]
fn test_each_choice_prints_one_confirmation() {
    let cases = [
        ("1", Provider::PayPal, "Payment of 99.90 tg via PayPal completed successfully."),
        ("2", Provider::Stripe, "Stripe: transaction for 99.90 tg completed successfully."),
        ("3", Provider::Kaspi, "Kaspi: payment of 99.90 tg processed via Kaspi.kz."),
        ("4", Provider::Halyk, "Halyk Bank: payment of 99.90 tg went through successfully."),
    ];

    for (choice, provider, expected) in cases {
        let (result, output) = run_scripted(&script(&["99.90", choice]), |t| run_payment(t));
        let confirmation = result.unwrap();

        assert_eq!(confirmation.provider, provider);
        let matching: Vec<&str> = output.lines().filter(|l| l.contains(" tg ")).collect();
        assert_eq!(matching, [expected]);
    }
}

#[test]
fn test_transcript_layout() {
    let (result, output) = run_scripted(&script(&["500", "2"]), |t| run_payment(t));
    result.unwrap();

    let expected = "Enter payment amount: \n\
                    Choose a payment method:\n\
                    1 - PayPal\n\
                    2 - Stripe\n\
                    3 - Kaspi\n\
                    4 - Halyk\n\
                    Your choice: \n\
                    \n\
                    Stripe: transaction for 500 tg completed successfully.\n\
                    \n";
    assert_eq!(output, expected);
}

#[test]
fn test_out_of_range_choice_falls_back_to_paypal() {
    for choice in ["0", "5", "42", "-3", "kaspi", ""] {
        let (result, output) = run_scripted(&script(&["10", choice]), |t| run_payment(t));
        assert_eq!(result.unwrap().provider, Provider::PayPal);
        assert!(output.contains("Payment of 10 tg via PayPal completed successfully."));
    }
}

#[test]
fn test_negative_amount_is_rejected() {
    let (result, output) = run_scripted(&script(&["-20", "1"]), |t| run_payment(t));
    assert!(result.is_err());
    assert!(!output.contains("PayPal completed"));
}
