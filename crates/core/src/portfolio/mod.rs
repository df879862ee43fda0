//! Portfolios of differently-denominated amounts.

pub mod holdings;

#[cfg(test)]
mod props;

pub use holdings::Portfolio;
