//! Exchange rates and the pivot-centred bank.

pub mod bank;
pub mod exchange;

#[cfg(test)]
mod props;

pub use bank::Bank;
pub use exchange::{CurrencyPair, ExchangeRate};
