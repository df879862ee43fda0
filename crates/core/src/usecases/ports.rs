//! Repository ports.
//!
//! These traits are implemented by the store crate.

use crate::currency::Bank;
use crate::portfolio::Portfolio;

/// Repository trait for the current bank.
pub trait BankRepository: Send + Sync {
    /// Returns the current bank, if one has been set up.
    fn get_bank(&self) -> Option<Bank>;

    /// Replaces the current bank.
    fn save(&self, bank: Bank);
}

/// Repository trait for the current portfolio.
pub trait PortfolioRepository: Send + Sync {
    /// Returns the current portfolio (empty when nothing was saved).
    fn get(&self) -> Portfolio;

    /// Replaces the current portfolio.
    fn save(&self, portfolio: Portfolio);
}
