//! In-memory bank repository.

use std::sync::{PoisonError, RwLock};

use fxfolio_core::usecases::BankRepository;
use fxfolio_core::Bank;
use tracing::debug;

/// Holds the current bank in memory.
///
/// Banks are immutable values, so a save swaps the whole value and a read
/// hands out a clone. A poisoned lock still holds a complete bank and is
/// recovered.
#[derive(Debug, Default)]
pub struct InMemoryBankRepository {
    bank: RwLock<Option<Bank>>,
}

impl InMemoryBankRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BankRepository for InMemoryBankRepository {
    fn get_bank(&self) -> Option<Bank> {
        let bank = self
            .bank
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        debug!(found = bank.is_some(), "Bank loaded");
        bank
    }

    fn save(&self, bank: Bank) {
        debug!(pivot = %bank.pivot(), rates = bank.rate_count(), "Bank saved");
        *self.bank.write().unwrap_or_else(PoisonError::into_inner) = Some(bank);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxfolio_core::ExchangeRate;
    use fxfolio_shared::Currency;

    #[test]
    fn test_empty_repository_has_no_bank() {
        assert!(InMemoryBankRepository::new().get_bank().is_none());
    }

    #[test]
    fn test_save_replaces_bank() {
        let repo = InMemoryBankRepository::new();
        let first = Bank::with_pivot_currency(Currency::Eur);
        let second = first.add(ExchangeRate::new(1.2, Currency::Usd)).unwrap();

        repo.save(first);
        repo.save(second.clone());

        assert_eq!(repo.get_bank(), Some(second));
    }
}
