//! Property-based tests for bank conversions.
//!
//! - Identity conversion
//! - Pivot round-trip
//! - Replacement semantics
//! - Invalid rate rejection

use fxfolio_shared::{Currency, Money};
use proptest::prelude::*;

use super::bank::Bank;
use super::exchange::ExchangeRate;

const PIVOT: Currency = Currency::Eur;

/// Strategy to generate finite amounts, negative ones included.
fn amount() -> impl Strategy<Value = f64> {
    -1_000_000_000.0f64..1_000_000_000.0
}

/// Strategy to generate valid rates (0.0001 to 100,000).
fn positive_rate() -> impl Strategy<Value = f64> {
    0.0001f64..100_000.0
}

/// Strategy to generate any supported currency.
fn any_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Strategy to generate a currency other than the pivot.
fn non_pivot_currency() -> impl Strategy<Value = Currency> {
    any_currency().prop_filter("must differ from pivot", |c| *c != PIVOT)
}

/// Strategy to generate a bank with a random subset of rates.
fn any_bank() -> impl Strategy<Value = Bank> {
    prop::collection::vec((positive_rate(), non_pivot_currency()), 0..6).prop_map(|rates| {
        rates.into_iter().fold(Bank::with_pivot_currency(PIVOT), |bank, (rate, to)| {
            bank.add(ExchangeRate::new(rate, to))
                .expect("generated rates are valid")
        })
    })
}

fn assert_close(actual: f64, expected: f64) -> Result<(), TestCaseError> {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    prop_assert!(
        (actual - expected).abs() <= tolerance,
        "{} is not within {} of {}",
        actual,
        tolerance,
        expected
    );
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting into the money's own currency never fails and never
    /// changes the value, whatever rates are present.
    #[test]
    fn prop_identity_conversion(
        bank in any_bank(),
        amount in amount(),
        currency in any_currency(),
    ) {
        let money = Money::new(amount, currency);
        prop_assert_eq!(bank.convert(money, currency), Ok(money));
    }

    /// Pivot -> C -> pivot recovers the original amount.
    #[test]
    fn prop_pivot_round_trip(
        amount in amount(),
        rate in positive_rate(),
        currency in non_pivot_currency(),
    ) {
        let bank = Bank::with_pivot_currency(PIVOT)
            .add(ExchangeRate::new(rate, currency))
            .unwrap();

        let there = bank.convert(Money::new(amount, PIVOT), currency).unwrap();
        let back = bank.convert(there, PIVOT).unwrap();

        prop_assert_eq!(back.currency, PIVOT);
        assert_close(back.amount, amount)?;
    }

    /// Adding a second rate for the same currency replaces the first.
    #[test]
    fn prop_second_rate_wins(
        amount in amount(),
        first in positive_rate(),
        second in positive_rate(),
        currency in non_pivot_currency(),
    ) {
        let bank = Bank::with_pivot_currency(PIVOT)
            .add(ExchangeRate::new(first, currency))
            .and_then(|bank| bank.add(ExchangeRate::new(second, currency)))
            .unwrap();

        let converted = bank.convert(Money::new(amount, PIVOT), currency).unwrap();

        prop_assert_eq!(bank.rate_count(), 1);
        prop_assert_eq!(converted, Money::new(amount * second, currency));
    }

    /// Non-positive rates are rejected and the bank is left untouched.
    #[test]
    fn prop_non_positive_rate_rejected(
        bank in any_bank(),
        rate in -100_000.0f64..=0.0,
        currency in non_pivot_currency(),
    ) {
        let before = bank.clone();
        let result = bank.add(ExchangeRate::new(rate, currency));

        prop_assert!(result.is_err());
        prop_assert!(result.unwrap_err().is_invalid_rate());
        prop_assert_eq!(bank, before);
    }
}
