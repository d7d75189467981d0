// Property tests for the credit application payload validation.

use chrono::{Days, Utc};
use creditline::modules::credits::models::{ApplyCreditRequest, CreditStatus};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn request(value: i64, days_ahead: u64, installments: i32) -> ApplyCreditRequest {
    ApplyCreditRequest {
        credit_value: Decimal::from(value),
        day_first_of_installment: Utc::now().date_naive() + Days::new(days_ahead),
        number_of_installments: installments,
        customer_id: 1,
    }
}

proptest! {
    /// Any positive value, near-future date and sane installment count is accepted
    #[test]
    fn prop_valid_requests_produce_in_progress_credits(
        value in 1i64..10_000_000,
        days_ahead in 1u64..85,
        installments in 1i32..=48,
    ) {
        let credit = request(value, days_ahead, installments).to_entity().unwrap();

        prop_assert_eq!(credit.status, CreditStatus::InProgress);
        prop_assert_eq!(credit.credit_value, Decimal::from(value));
        prop_assert_eq!(credit.customer_id, 1);
        prop_assert!(credit.id.is_none());
    }

    /// Non-positive values never survive validation
    #[test]
    fn prop_non_positive_values_rejected(value in -10_000i64..=0) {
        prop_assert!(request(value, 10, 3).to_entity().is_err());
    }

    /// Installment counts outside 1..=48 never survive validation
    #[test]
    fn prop_installments_out_of_range_rejected(installments in prop_oneof![
        -100i32..1,
        49i32..200,
    ]) {
        prop_assert!(request(1000, 10, installments).to_entity().is_err());
    }
}

#[test]
fn test_todays_date_is_rejected() {
    assert!(request(1000, 0, 3).to_entity().is_err());
}

#[test]
fn test_generated_codes_are_unique() {
    let first = request(1000, 10, 3).to_entity().unwrap();
    let second = request(1000, 10, 3).to_entity().unwrap();
    assert_ne!(first.credit_code, second.credit_code);
}
