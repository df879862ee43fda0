//! Portfolio holdings and evaluation.

use fxfolio_shared::{Currency, Money};

use crate::currency::Bank;
use crate::error::{MoneyError, MoneyResult};

/// Ordered, immutable collection of holdings.
///
/// Appending returns a new portfolio; order is kept for deterministic
/// iteration only and does not affect evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    holdings: Vec<Money>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new portfolio with `money` appended.
    #[must_use]
    pub fn with(&self, money: Money) -> Self {
        let mut holdings = Vec::with_capacity(self.holdings.len() + 1);
        holdings.extend_from_slice(&self.holdings);
        holdings.push(money);
        Self { holdings }
    }

    /// Holdings in insertion order.
    #[must_use]
    pub fn holdings(&self) -> &[Money] {
        &self.holdings
    }

    /// Number of holdings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the portfolio holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Evaluates the portfolio as a single amount in `to`.
    ///
    /// Every holding is converted before anything is summed, so a failed
    /// evaluation reports all missing rates at once rather than the first.
    /// An empty portfolio evaluates to zero.
    ///
    /// # Errors
    ///
    /// Returns the combination of every conversion failure, with each
    /// missing currency pair listed once in first-seen order.
    pub fn evaluate(&self, bank: &Bank, to: Currency) -> MoneyResult<Money> {
        let mut converted = Vec::with_capacity(self.holdings.len());
        let mut failures = Vec::new();

        for money in &self.holdings {
            match bank.convert(*money, to) {
                Ok(value) => converted.push(value),
                Err(err) => failures.push(err),
            }
        }

        if let Some(err) = MoneyError::combine(failures) {
            return Err(err);
        }

        Ok(converted
            .into_iter()
            .fold(Money::zero(to), |total, value| total + value))
    }
}

impl FromIterator<Money> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Money>>(iter: I) -> Self {
        Self {
            holdings: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Money>> for Portfolio {
    fn from(holdings: Vec<Money>) -> Self {
        Self { holdings }
    }
}
