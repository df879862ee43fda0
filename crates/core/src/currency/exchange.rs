//! Exchange rate types.

use fxfolio_shared::Currency;

/// Exchange rate from the bank's pivot currency.
///
/// Always read as "1 unit of pivot = `rate` units of `to`".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRate {
    /// Units of `to` per unit of the pivot currency.
    pub rate: f64,
    /// Target currency.
    pub to: Currency,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    ///
    /// The rate is validated when it is added to a `Bank`.
    #[must_use]
    pub const fn new(rate: f64, to: Currency) -> Self {
        Self { rate, to }
    }

    /// Returns the inverse rate (units of pivot per unit of `to`).
    #[must_use]
    pub fn inverse(&self) -> f64 {
        1.0 / self.rate
    }

    /// Returns true if the rate is finite and strictly positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.rate.is_finite() && self.rate > 0.0
    }
}

/// Ordered pair of currencies for one conversion leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
}

impl CurrencyPair {
    /// Creates a new currency pair.
    #[must_use]
    pub const fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
