//! Evaluate the current portfolio in one currency.

use std::sync::Arc;

use fxfolio_shared::{Currency, Money};
use tracing::{debug, warn};

use super::error::UseCaseError;
use super::ports::{BankRepository, PortfolioRepository};
use super::UseCase;

/// Command: evaluate the portfolio in `currency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatePortfolio {
    /// Target currency.
    pub currency: Currency,
}

/// Total value of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationResult {
    /// Unrounded total.
    pub amount: f64,
    /// Currency of the total.
    pub currency: Currency,
}

impl From<Money> for EvaluationResult {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount,
            currency: money.currency,
        }
    }
}

/// Evaluates the stored portfolio against the stored bank.
pub struct EvaluatePortfolioUseCase<B: BankRepository, P: PortfolioRepository> {
    bank_repository: Arc<B>,
    portfolio_repository: Arc<P>,
}

impl<B: BankRepository, P: PortfolioRepository> EvaluatePortfolioUseCase<B, P> {
    /// Create a new evaluate-portfolio use case.
    #[must_use]
    pub fn new(bank_repository: Arc<B>, portfolio_repository: Arc<P>) -> Self {
        Self {
            bank_repository,
            portfolio_repository,
        }
    }
}

impl<B: BankRepository, P: PortfolioRepository> UseCase<EvaluatePortfolio, EvaluationResult>
    for EvaluatePortfolioUseCase<B, P>
{
    fn invoke(&self, command: EvaluatePortfolio) -> Result<EvaluationResult, UseCaseError> {
        let bank = self
            .bank_repository
            .get_bank()
            .ok_or_else(UseCaseError::no_bank_defined)?;

        let portfolio = self.portfolio_repository.get();
        let total = portfolio
            .evaluate(&bank, command.currency)
            .inspect_err(|err| {
                warn!(
                    code = err.error_code(),
                    holdings = portfolio.len(),
                    %err,
                    "Portfolio evaluation failed"
                );
            })?;

        debug!(%total, holdings = portfolio.len(), "Portfolio evaluated");
        Ok(total.into())
    }
}
