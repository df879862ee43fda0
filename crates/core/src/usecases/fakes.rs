//! Test doubles for the repository ports.

use std::sync::Mutex;

use super::ports::{BankRepository, PortfolioRepository};
use crate::currency::Bank;
use crate::portfolio::Portfolio;

#[derive(Default)]
pub struct FakeBankRepository {
    bank: Mutex<Option<Bank>>,
}

impl FakeBankRepository {
    pub fn with_bank(bank: Bank) -> Self {
        Self {
            bank: Mutex::new(Some(bank)),
        }
    }
}

impl BankRepository for FakeBankRepository {
    fn get_bank(&self) -> Option<Bank> {
        self.bank.lock().unwrap().clone()
    }

    fn save(&self, bank: Bank) {
        *self.bank.lock().unwrap() = Some(bank);
    }
}

#[derive(Default)]
pub struct FakePortfolioRepository {
    portfolio: Mutex<Portfolio>,
}

impl FakePortfolioRepository {
    pub fn with_portfolio(portfolio: Portfolio) -> Self {
        Self {
            portfolio: Mutex::new(portfolio),
        }
    }
}

impl PortfolioRepository for FakePortfolioRepository {
    fn get(&self) -> Portfolio {
        self.portfolio.lock().unwrap().clone()
    }

    fn save(&self, portfolio: Portfolio) {
        *self.portfolio.lock().unwrap() = portfolio;
    }
}
