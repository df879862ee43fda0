//! Add a holding to the current portfolio.

use std::sync::Arc;

use fxfolio_shared::{Currency, Money};
use tracing::{debug, warn};

use super::error::UseCaseError;
use super::ports::PortfolioRepository;
use super::UseCase;

/// Command: hold `amount` of `currency`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddInPortfolio {
    /// Amount held, negative for debts.
    pub amount: f64,
    /// Currency of the amount.
    pub currency: Currency,
}

/// Appends a holding to the stored portfolio.
pub struct AddInPortfolioUseCase<P: PortfolioRepository> {
    portfolio_repository: Arc<P>,
}

impl<P: PortfolioRepository> AddInPortfolioUseCase<P> {
    /// Create a new add-in-portfolio use case.
    #[must_use]
    pub fn new(portfolio_repository: Arc<P>) -> Self {
        Self {
            portfolio_repository,
        }
    }
}

impl<P: PortfolioRepository> UseCase<AddInPortfolio, ()> for AddInPortfolioUseCase<P> {
    fn invoke(&self, command: AddInPortfolio) -> Result<(), UseCaseError> {
        let money = Money::new(command.amount, command.currency);
        if !money.is_finite() {
            warn!(%money, "Holding rejected");
            return Err(UseCaseError::new(format!(
                "Invalid amount {money}: amount must be finite"
            )));
        }

        let portfolio = self.portfolio_repository.get().with(money);
        debug!(%money, holdings = portfolio.len(), "Holding added");
        self.portfolio_repository.save(portfolio);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::fakes::FakePortfolioRepository;
    use fxfolio_shared::Currency::{Eur, Usd};
    use rstest::rstest;

    #[test]
    fn test_appends_in_order() {
        let repo = Arc::new(FakePortfolioRepository::default());
        let use_case = AddInPortfolioUseCase::new(Arc::clone(&repo));

        use_case
            .invoke(AddInPortfolio { amount: 5.0, currency: Usd })
            .unwrap();
        use_case
            .invoke(AddInPortfolio { amount: -10.0, currency: Eur })
            .unwrap();

        assert_eq!(
            repo.get().holdings(),
            &[Money::dollars(5.0), Money::euros(-10.0)]
        );
    }

    #[rstest]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    #[case::negative_infinite(f64::NEG_INFINITY)]
    fn test_rejects_non_finite_amount(#[case] amount: f64) {
        let repo = Arc::new(FakePortfolioRepository::with_portfolio(
            [Money::euros(10.0)].into_iter().collect(),
        ));
        let use_case = AddInPortfolioUseCase::new(Arc::clone(&repo));

        let err = use_case
            .invoke(AddInPortfolio { amount, currency: Usd })
            .unwrap_err();

        assert!(err.message().starts_with("Invalid amount "));
        assert!(err.message().ends_with(" USD: amount must be finite"));
        assert_eq!(repo.get().holdings(), &[Money::euros(10.0)]);
    }
}
