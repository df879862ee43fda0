//! Fxfolio portfolio evaluator.
//!
//! Loads a bank and a portfolio from configuration, evaluates the portfolio
//! in the configured currency, and prints the total.
//!
//! Usage: RUN_MODE=development fxfolio

use std::sync::Arc;

use anyhow::Context;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxfolio_core::usecases::{
    AddExchangeRate, AddExchangeRateUseCase, AddInPortfolio, AddInPortfolioUseCase,
    EvaluatePortfolio, EvaluatePortfolioUseCase, EvaluationResult, SetupBank, SetupBankUseCase,
    UseCase,
};
use fxfolio_shared::AppConfig;
use fxfolio_store::{InMemoryBankRepository, InMemoryPortfolioRepository};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fxfolio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    info!(
        pivot = %config.bank.pivot,
        rates = config.bank.rates.len(),
        holdings = config.portfolio.holdings.len(),
        "Configuration loaded"
    );

    let result = run(&config)?;
    println!(
        "Total: {} {}",
        round_for_display(result.amount, config.evaluation.display_decimal_places)?,
        result.currency
    );

    Ok(())
}

/// Seeds the repositories from `config` and evaluates the portfolio.
fn run(config: &AppConfig) -> anyhow::Result<EvaluationResult> {
    let bank_repository = Arc::new(InMemoryBankRepository::new());
    let portfolio_repository = Arc::new(InMemoryPortfolioRepository::new());

    SetupBankUseCase::new(Arc::clone(&bank_repository)).invoke(SetupBank {
        pivot: config.bank.pivot,
    })?;

    let add_rate = AddExchangeRateUseCase::new(Arc::clone(&bank_repository));
    for rate in &config.bank.rates {
        add_rate
            .invoke(AddExchangeRate {
                rate: rate.rate,
                currency: rate.to,
            })
            .with_context(|| format!("Invalid rate for {}", rate.to))?;
    }

    let add_holding = AddInPortfolioUseCase::new(Arc::clone(&portfolio_repository));
    for money in &config.portfolio.holdings {
        add_holding.invoke(AddInPortfolio {
            amount: money.amount,
            currency: money.currency,
        })?;
    }

    EvaluatePortfolioUseCase::new(bank_repository, portfolio_repository)
        .invoke(EvaluatePortfolio {
            currency: config.evaluation.currency,
        })
        .inspect_err(|err| warn!(%err, "Evaluation failed"))
        .context("Portfolio evaluation failed")
}

/// Rounds an engine amount for display using banker's rounding.
fn round_for_display(amount: f64, decimal_places: u32) -> anyhow::Result<Decimal> {
    let value = Decimal::from_f64(amount)
        .with_context(|| format!("Amount {amount} cannot be displayed"))?;
    Ok(value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven))
}
