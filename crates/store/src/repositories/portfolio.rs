//! In-memory portfolio repository.

use std::sync::{PoisonError, RwLock};

use fxfolio_core::usecases::PortfolioRepository;
use fxfolio_core::Portfolio;
use tracing::debug;

/// Holds the current portfolio in memory.
#[derive(Debug, Default)]
pub struct InMemoryPortfolioRepository {
    portfolio: RwLock<Portfolio>,
}

impl InMemoryPortfolioRepository {
    /// Creates a repository holding an empty portfolio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PortfolioRepository for InMemoryPortfolioRepository {
    fn get(&self) -> Portfolio {
        self.portfolio
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, portfolio: Portfolio) {
        debug!(holdings = portfolio.len(), "Portfolio saved");
        *self.portfolio.write().unwrap_or_else(PoisonError::into_inner) = portfolio;
    }
}
