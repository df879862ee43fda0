//! Core conversion engine for Fxfolio.
//!
//! This crate contains pure business logic with ZERO storage or web dependencies.
//! Every operation is synchronous and works on immutable values.
//!
//! # Modules
//!
//! - `currency` - Exchange rates and the pivot-centred `Bank`
//! - `portfolio` - Holdings and their evaluation in one currency
//! - `error` - Engine errors and their aggregation
//! - `usecases` - Application use cases and repository ports

pub mod currency;
pub mod error;
pub mod portfolio;
pub mod usecases;

pub use currency::{Bank, CurrencyPair, ExchangeRate};
pub use error::{MoneyError, MoneyResult};
pub use portfolio::Portfolio;
