#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::app::render::OutputFormat;
use crate::core::filter::StopSelection;
use crate::core::labels::Locale;
use crate::core::pricing::{Currency, RateTable};
use crate::utils::error::{BoardError, Result};
use crate::utils::validation::{validate_currency_code, validate_path, validate_rate, Validate};
use toml_config::TomlConfig;

/// Fully resolved run settings, after command line and config file are merged.
#[derive(Debug, Clone)]
pub struct Settings {
    pub tickets_path: String,
    pub validate_tickets: bool,
    pub currency: Currency,
    pub locale: Locale,
    pub format: OutputFormat,
    pub selection: StopSelection,
    pub rates: RateTable,
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        let tickets_path = config
            .tickets_path()
            .ok_or_else(|| BoardError::MissingConfigError {
                field: "data.tickets_path".to_string(),
            })?
            .to_string();

        Ok(Self {
            tickets_path,
            validate_tickets: config.validate_tickets(),
            currency: config.currency()?.unwrap_or_default(),
            locale: config.locale()?.unwrap_or_default(),
            format: config.format()?.unwrap_or_default(),
            selection: config.selection()?.unwrap_or_default(),
            rates: config.rate_table(),
        })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("tickets_path", &self.tickets_path)?;
        for (code, rate) in self.rates.iter() {
            validate_currency_code("rates", code)?;
            validate_rate(&format!("rates.{}", code), rate)?;
        }
        Ok(())
    }
}
