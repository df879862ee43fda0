//! Repository implementations.

pub mod bank;
pub mod portfolio;

pub use bank::InMemoryBankRepository;
pub use portfolio::InMemoryPortfolioRepository;
