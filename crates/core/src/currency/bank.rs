//! Pivot-centred rate table and conversions.
//!
//! Every rate is stored relative to one pivot currency. Converting between
//! two other currencies always goes through the pivot, in two hops; there is
//! no search for longer paths.

use std::collections::HashMap;

use fxfolio_shared::{Currency, Money};

use super::exchange::{CurrencyPair, ExchangeRate};
use crate::error::{MoneyError, MoneyResult};

/// Immutable rate table keyed by non-pivot currency.
///
/// `add` never mutates the receiver; it returns a new bank. A bank can
/// therefore be shared freely between readers.
#[derive(Debug, Clone, PartialEq)]
pub struct Bank {
    pivot: Currency,
    rates: HashMap<Currency, ExchangeRate>,
}

impl Bank {
    /// Creates a bank with an empty rate table.
    #[must_use]
    pub fn with_pivot_currency(pivot: Currency) -> Self {
        Self {
            pivot,
            rates: HashMap::new(),
        }
    }

    /// Returns the pivot currency.
    #[must_use]
    pub const fn pivot(&self) -> Currency {
        self.pivot
    }

    /// Returns the rate registered for `currency`, if any.
    #[must_use]
    pub fn rate_for(&self, currency: Currency) -> Option<&ExchangeRate> {
        self.rates.get(&currency)
    }

    /// Number of registered rates.
    #[must_use]
    pub fn rate_count(&self) -> usize {
        self.rates.len()
    }

    /// Returns every registered rate, ordered by currency code.
    #[must_use]
    pub fn rates(&self) -> Vec<ExchangeRate> {
        let mut rates: Vec<ExchangeRate> = self.rates.values().copied().collect();
        rates.sort_by_key(|rate| rate.to.code());
        rates
    }

    /// Returns a new bank with `rate` registered, replacing any previous
    /// rate for the same currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::NonPositiveRate` if the rate is not finite and
    /// strictly positive, and `MoneyError::PivotCurrencyRate` if it targets
    /// the pivot currency.
    pub fn add(&self, rate: ExchangeRate) -> MoneyResult<Self> {
        if !rate.is_valid() {
            return Err(MoneyError::NonPositiveRate {
                rate: rate.rate,
                to: rate.to,
            });
        }
        if rate.to == self.pivot {
            return Err(MoneyError::PivotCurrencyRate(rate.to));
        }

        let mut rates = self.rates.clone();
        rates.insert(rate.to, rate);
        Ok(Self {
            pivot: self.pivot,
            rates,
        })
    }

    /// Converts `money` into `to`.
    ///
    /// Same-currency conversion returns `money` untouched. Otherwise at most
    /// two legs are used: source to pivot, then pivot to target. No rounding
    /// is applied.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::MissingExchangeRates` listing every leg with no
    /// registered rate.
    pub fn convert(&self, money: Money, to: Currency) -> MoneyResult<Money> {
        if money.currency == to {
            return Ok(money);
        }

        if money.currency == self.pivot {
            let rate = self
                .rate_for(to)
                .ok_or_else(|| MoneyError::missing_rate(self.pivot, to))?;
            return Ok(Money::new(money.amount * rate.rate, to));
        }

        if to == self.pivot {
            let rate = self
                .rate_for(money.currency)
                .ok_or_else(|| MoneyError::missing_rate(money.currency, self.pivot))?;
            return Ok(Money::new(money.amount * rate.inverse(), to));
        }

        match (self.rate_for(money.currency), self.rate_for(to)) {
            (Some(from_rate), Some(to_rate)) => {
                let pivot_amount = money.amount * from_rate.inverse();
                Ok(Money::new(pivot_amount * to_rate.rate, to))
            }
            (from_rate, to_rate) => {
                let mut missing = Vec::with_capacity(2);
                if from_rate.is_none() {
                    missing.push(CurrencyPair::new(money.currency, self.pivot));
                }
                if to_rate.is_none() {
                    missing.push(CurrencyPair::new(self.pivot, to));
                }
                Err(MoneyError::MissingExchangeRates(missing))
            }
        }
    }
}
