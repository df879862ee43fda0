//! Register an exchange rate on the current bank.

use std::sync::Arc;

use fxfolio_shared::Currency;
use tracing::{debug, warn};

use super::error::UseCaseError;
use super::ports::BankRepository;
use super::UseCase;
use crate::currency::ExchangeRate;

/// Command: 1 pivot = `rate` units of `currency`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddExchangeRate {
    /// Units of `currency` per unit of the pivot.
    pub rate: f64,
    /// Target currency.
    pub currency: Currency,
}

/// Adds (or replaces) a rate on the stored bank.
pub struct AddExchangeRateUseCase<B: BankRepository> {
    bank_repository: Arc<B>,
}

impl<B: BankRepository> AddExchangeRateUseCase<B> {
    /// Create a new add-exchange-rate use case.
    #[must_use]
    pub fn new(bank_repository: Arc<B>) -> Self {
        Self { bank_repository }
    }
}

impl<B: BankRepository> UseCase<AddExchangeRate, ()> for AddExchangeRateUseCase<B> {
    fn invoke(&self, command: AddExchangeRate) -> Result<(), UseCaseError> {
        let bank = self
            .bank_repository
            .get_bank()
            .ok_or_else(UseCaseError::no_bank_defined)?;

        let updated = bank
            .add(ExchangeRate::new(command.rate, command.currency))
            .inspect_err(|err| warn!(code = err.error_code(), %err, "Exchange rate rejected"))?;

        self.bank_repository.save(updated);
        debug!(rate = command.rate, currency = %command.currency, "Exchange rate added");
        Ok(())
    }
}
