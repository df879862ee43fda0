//! Set up a new bank.

use std::sync::Arc;

use fxfolio_shared::Currency;
use tracing::debug;

use super::error::UseCaseError;
use super::ports::BankRepository;
use super::UseCase;
use crate::currency::Bank;

/// Command: start a new bank around `pivot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupBank {
    /// Pivot currency of the new bank.
    pub pivot: Currency,
}

/// Replaces the stored bank with an empty one.
pub struct SetupBankUseCase<B: BankRepository> {
    bank_repository: Arc<B>,
}

impl<B: BankRepository> SetupBankUseCase<B> {
    /// Create a new setup-bank use case.
    #[must_use]
    pub fn new(bank_repository: Arc<B>) -> Self {
        Self { bank_repository }
    }
}

impl<B: BankRepository> UseCase<SetupBank, ()> for SetupBankUseCase<B> {
    fn invoke(&self, command: SetupBank) -> Result<(), UseCaseError> {
        self.bank_repository.save(Bank::with_pivot_currency(command.pivot));
        debug!(pivot = %command.pivot, "Bank set up");
        Ok(())
    }
}
