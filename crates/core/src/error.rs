//! Conversion engine error types.
//!
//! A single enum covers every failure of `Bank` and `Portfolio`. Failures are
//! returned as values; nothing in the engine panics or recovers silently.

use fxfolio_shared::Currency;
use thiserror::Error;

use crate::currency::CurrencyPair;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by the conversion engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoneyError {
    /// Exchange rate is zero, negative, or not finite.
    #[error("Invalid exchange rate {rate} for {to}: rate must be positive and finite")]
    NonPositiveRate {
        /// The rejected rate.
        rate: f64,
        /// Target currency of the rejected rate.
        to: Currency,
    },

    /// Exchange rate targets the pivot currency itself.
    #[error("Invalid exchange rate for {0}: {0} is the pivot currency")]
    PivotCurrencyRate(Currency),

    /// No rate available for one or more conversion legs.
    #[error("Missing exchange rate(s): {}", format_pairs(.0))]
    MissingExchangeRates(Vec<CurrencyPair>),

    /// Several unrelated failures.
    #[error("{}", join_messages(.0))]
    Multiple(Vec<MoneyError>),
}

fn format_pairs(pairs: &[CurrencyPair]) -> String {
    pairs
        .iter()
        .map(|pair| format!("[{pair}]"))
        .collect::<Vec<_>>()
        .join(",")
}

fn join_messages(errors: &[MoneyError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl MoneyError {
    /// Missing rate for a single conversion leg.
    #[must_use]
    pub fn missing_rate(from: Currency, to: Currency) -> Self {
        Self::MissingExchangeRates(vec![CurrencyPair::new(from, to)])
    }

    /// Combines failures into one diagnostic.
    ///
    /// Nested combinations are flattened. Every missing pair is merged into a
    /// single `MissingExchangeRates` entry, deduplicated and kept in first-seen
    /// order. Other errors are deduplicated by equality. Returns `None` when
    /// there is nothing to combine and the error itself when only one remains.
    #[must_use]
    pub fn combine<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut combined: Vec<Self> = Vec::new();
        // Index of the merged missing-rates entry inside `combined`.
        let mut missing_at: Option<usize> = None;

        let mut pending: Vec<Self> = errors.into_iter().collect();
        pending.reverse();

        while let Some(error) = pending.pop() {
            match error {
                Self::Multiple(inner) => pending.extend(inner.into_iter().rev()),
                Self::MissingExchangeRates(pairs) => {
                    let index = *missing_at.get_or_insert_with(|| {
                        combined.push(Self::MissingExchangeRates(Vec::new()));
                        combined.len() - 1
                    });
                    if let Self::MissingExchangeRates(merged) = &mut combined[index] {
                        for pair in pairs {
                            if !merged.contains(&pair) {
                                merged.push(pair);
                            }
                        }
                    }
                }
                other => {
                    if !combined.contains(&other) {
                        combined.push(other);
                    }
                }
            }
        }

        match combined.len() {
            0 => None,
            1 => combined.pop(),
            _ => Some(Self::Multiple(combined)),
        }
    }

    /// Returns the human-readable diagnostic.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns the error code for diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveRate { .. } | Self::PivotCurrencyRate(_) => "INVALID_RATE",
            Self::MissingExchangeRates(_) => "MISSING_EXCHANGE_RATE",
            Self::Multiple(_) => "MULTIPLE_ERRORS",
        }
    }

    /// Returns true if the rate was rejected before being stored.
    #[must_use]
    pub const fn is_invalid_rate(&self) -> bool {
        matches!(
            self,
            Self::NonPositiveRate { .. } | Self::PivotCurrencyRate(_)
        )
    }

    /// Pairs with no rate available, in first-seen order.
    #[must_use]
    pub fn missing_pairs(&self) -> Vec<CurrencyPair> {
        match self {
            Self::MissingExchangeRates(pairs) => pairs.clone(),
            Self::Multiple(errors) => errors.iter().flat_map(Self::missing_pairs).collect(),
            Self::NonPositiveRate { .. } | Self::PivotCurrencyRate(_) => Vec::new(),
        }
    }
}
