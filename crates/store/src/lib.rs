//! Storage layer for Fxfolio.
//!
//! This crate provides in-memory implementations of the repository ports
//! declared in `fxfolio_core::usecases`.

pub mod repositories;

pub use repositories::{InMemoryBankRepository, InMemoryPortfolioRepository};
