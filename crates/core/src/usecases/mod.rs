//! Application use cases over the conversion engine.
//!
//! Use cases fetch a `Bank` and a `Portfolio` from repository ports, run
//! the engine, and translate every failure into a `UseCaseError`.

pub mod add_exchange_rate;
pub mod add_in_portfolio;
pub mod error;
pub mod evaluate_portfolio;
pub mod ports;
pub mod setup_bank;

#[cfg(test)]
mod fakes;

pub use add_exchange_rate::{AddExchangeRate, AddExchangeRateUseCase};
pub use add_in_portfolio::{AddInPortfolio, AddInPortfolioUseCase};
pub use error::UseCaseError;
pub use evaluate_portfolio::{EvaluatePortfolio, EvaluatePortfolioUseCase, EvaluationResult};
pub use ports::{BankRepository, PortfolioRepository};
pub use setup_bank::{SetupBank, SetupBankUseCase};

/// A command handler.
pub trait UseCase<C, R> {
    /// Runs the use case for `command`.
    ///
    /// # Errors
    ///
    /// Returns a `UseCaseError` describing why the command failed.
    fn invoke(&self, command: C) -> Result<R, UseCaseError>;
}
