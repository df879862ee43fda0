//! Property-based tests for portfolio evaluation.
//!
//! - Missing-rate totality
//! - Zero-failure aggregation

use std::collections::HashSet;

use fxfolio_shared::{Currency, Money};
use proptest::prelude::*;

use super::holdings::Portfolio;
use crate::currency::{Bank, CurrencyPair, ExchangeRate};

const PIVOT: Currency = Currency::Eur;

/// Strategy to generate finite amounts.
fn amount() -> impl Strategy<Value = f64> {
    -1_000_000.0f64..1_000_000.0
}

/// Strategy to generate holdings in any non-pivot currency.
fn foreign_holdings() -> impl Strategy<Value = Vec<Money>> {
    let foreign: Vec<Currency> = Currency::ALL.into_iter().filter(|c| *c != PIVOT).collect();
    prop::collection::vec(
        (amount(), prop::sample::select(foreign)).prop_map(|(a, c)| Money::new(a, c)),
        1..12,
    )
}

/// Strategy to generate holdings in any currency.
fn any_holdings() -> impl Strategy<Value = Vec<Money>> {
    prop::collection::vec(
        (amount(), prop::sample::select(Currency::ALL.to_vec()))
            .prop_map(|(a, c)| Money::new(a, c)),
        0..12,
    )
}

/// A bank with a rate for every supported currency.
fn full_bank() -> Bank {
    Currency::ALL
        .into_iter()
        .filter(|c| *c != PIVOT)
        .zip([1.2, 1344.0, 0.85, 160.5])
        .try_fold(Bank::with_pivot_currency(PIVOT), |bank, (to, rate)| {
            bank.add(ExchangeRate::new(rate, to))
        })
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// With no rates at all, evaluating into the pivot names every distinct
    /// foreign currency exactly once, in first-seen order.
    #[test]
    fn prop_every_missing_pair_reported(holdings in foreign_holdings()) {
        let portfolio = Portfolio::from(holdings.clone());
        let err = portfolio
            .evaluate(&Bank::with_pivot_currency(PIVOT), PIVOT)
            .unwrap_err();

        let mut seen = HashSet::new();
        let expected: Vec<CurrencyPair> = holdings
            .iter()
            .filter(|money| seen.insert(money.currency))
            .map(|money| CurrencyPair::new(money.currency, PIVOT))
            .collect();

        prop_assert_eq!(err.missing_pairs(), expected);
    }

    /// When every rate is present the total equals the sum of each
    /// converted holding.
    #[test]
    fn prop_total_is_sum_of_converted(
        holdings in any_holdings(),
        to in prop::sample::select(Currency::ALL.to_vec()),
    ) {
        let bank = full_bank();
        let portfolio = Portfolio::from(holdings);

        let expected = portfolio
            .holdings()
            .iter()
            .map(|money| bank.convert(*money, to).unwrap())
            .fold(Money::zero(to), |total, value| total + value);

        prop_assert_eq!(portfolio.evaluate(&bank, to), Ok(expected));
    }
}
