//! Application configuration management.

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::{Currency, Money};

/// Upper bound for `evaluation.display_decimal_places`.
const MAX_DISPLAY_DECIMAL_PLACES: u32 = 12;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Bank configuration.
    #[serde(default)]
    pub bank: BankConfig,
    /// Portfolio configuration.
    #[serde(default)]
    pub portfolio: PortfolioConfig,
    /// Evaluation configuration.
    #[serde(default)]
    pub evaluation: EvaluationConfig,
}

/// Bank configuration: a pivot currency and the rates relative to it.
#[derive(Debug, Clone, Deserialize)]
pub struct BankConfig {
    /// Pivot currency every rate is expressed against.
    #[serde(default = "default_pivot")]
    pub pivot: Currency,
    /// Exchange rates (1 pivot = `rate` units of `to`).
    #[serde(default)]
    pub rates: Vec<RateConfig>,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            pivot: default_pivot(),
            rates: Vec::new(),
        }
    }
}

fn default_pivot() -> Currency {
    Currency::Eur
}

/// A single configured exchange rate.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RateConfig {
    /// Units of `to` per unit of the pivot currency.
    pub rate: f64,
    /// Target currency.
    pub to: Currency,
}

/// Portfolio configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioConfig {
    /// Holdings, in insertion order.
    #[serde(default)]
    pub holdings: Vec<Money>,
}

/// Evaluation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationConfig {
    /// Currency the portfolio is evaluated in.
    #[serde(default = "default_currency")]
    pub currency: Currency,
    /// Decimal places used when printing the total.
    #[serde(default = "default_display_decimal_places")]
    pub display_decimal_places: u32,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            display_decimal_places: default_display_decimal_places(),
        }
    }
}

fn default_currency() -> Currency {
    Currency::Usd
}

fn default_display_decimal_places() -> u32 {
    2
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// then `FXFOLIO__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FXFOLIO").separator("__"))
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Parses configuration from an inline TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed or is invalid.
    pub fn from_toml_str(toml: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Checks values serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when a value is out of range or a rate
    /// or holding amount is NaN or infinite.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(rate) = self.bank.rates.iter().find(|rate| !rate.rate.is_finite()) {
            return Err(AppError::Validation(format!(
                "bank.rates: rate for {} must be finite, got {}",
                rate.to, rate.rate
            )));
        }
        if let Some(money) = self.portfolio.holdings.iter().find(|money| !money.is_finite()) {
            return Err(AppError::Validation(format!(
                "portfolio.holdings: amount must be finite, got {money}"
            )));
        }
        if self.evaluation.display_decimal_places > MAX_DISPLAY_DECIMAL_PLACES {
            return Err(AppError::Validation(format!(
                "evaluation.display_decimal_places must be at most {MAX_DISPLAY_DECIMAL_PLACES}, got {}",
                self.evaluation.display_decimal_places
            )));
        }
        Ok(())
    }
}
