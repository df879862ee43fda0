//! Money type with an amount and a currency.
//!
//! Amounts are `f64`: the conversion engine works in floating point and never
//! rounds. Rounding for display happens at the edges (see the `fxfolio` binary).

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Two values are equal only when both the amount and the currency match
/// exactly. Negative amounts are allowed (debts, short positions).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Money {
    /// The amount, in units of `currency`.
    pub amount: f64,
    /// ISO 4217 currency code (e.g., "USD", "KRW").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro
    Eur,
    /// US Dollar
    Usd,
    /// South Korean Won
    Krw,
    /// Pound Sterling
    Gbp,
    /// Japanese Yen
    Jpy,
}

impl Currency {
    /// Every supported currency.
    pub const ALL: [Self; 5] = [Self::Eur, Self::Usd, Self::Krw, Self::Gbp, Self::Jpy];

    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Krw => "KRW",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: 0.0,
            currency,
        }
    }

    /// Amount in euros.
    #[must_use]
    pub const fn euros(amount: f64) -> Self {
        Self::new(amount, Currency::Eur)
    }

    /// Amount in US dollars.
    #[must_use]
    pub const fn dollars(amount: f64) -> Self {
        Self::new(amount, Currency::Usd)
    }

    /// Amount in Korean wons.
    #[must_use]
    pub const fn korean_wons(amount: f64) -> Self {
        Self::new(amount, Currency::Krw)
    }

    /// Returns true if the amount is neither NaN nor infinite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.amount.is_finite()
    }

    /// Adds two amounts of the same currency.
    ///
    /// Returns `None` when the currencies differ.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        (self.currency == other.currency)
            .then(|| Self::new(self.amount + other.amount, self.currency))
    }
}

impl Add for Money {
    type Output = Self;

    /// Adds two amounts of the same currency.
    ///
    /// # Panics
    ///
    /// Panics if the currencies differ. Callers convert before adding.
    fn add(self, other: Self) -> Self {
        self.checked_add(other)
            .unwrap_or_else(|| panic!("cannot add {other} to {self} without converting first"))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "KRW" => Ok(Self::Krw),
            "GBP" => Ok(Self::Gbp),
            "JPY" => Ok(Self::Jpy),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
