use crate::app::render::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::core::filter::parse_selection;
use crate::core::labels::Locale;
use crate::core::pricing::{Currency, RateTable};
use crate::utils::error::{BoardError, Result};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "ticket-board")]
#[command(about = "Show flight tickets filtered by stops, priced in the chosen currency")]
pub struct CliConfig {
    /// Path to the tickets JSON file ({"tickets": [...]})
    #[arg(short, long)]
    pub tickets: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Display currency (RUB, USD, EUR)
    #[arg(long)]
    pub currency: Option<Currency>,

    /// Stop filters: all, nonStop, oneStop, twoStops, threeStops
    #[arg(long, value_delimiter = ',')]
    pub stops: Vec<String>,

    /// Override an exchange rate, e.g. --rate USD=0.011
    #[arg(long = "rate", value_parser = parse_rate)]
    pub rates: Vec<(String, f64)>,

    /// Label language (ru, en)
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Output format (text, csv, tsv, json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Reject malformed ticket records while loading
    #[arg(long)]
    pub validate: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

fn parse_rate(s: &str) -> std::result::Result<(String, f64), String> {
    let (code, rate) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CODE=RATE, got '{}'", s))?;
    let rate: f64 = rate
        .trim()
        .parse()
        .map_err(|e| format!("invalid rate '{}': {}", rate, e))?;
    Ok((code.trim().to_ascii_uppercase(), rate))
}

impl CliConfig {
    /// Merges the command line over an optional config file. Command line wins.
    pub fn resolve(&self, file: Option<&TomlConfig>) -> Result<Settings> {
        let file_default = TomlConfig::default();
        let file = file.unwrap_or(&file_default);

        let tickets_path = self
            .tickets
            .clone()
            .or_else(|| file.tickets_path().map(str::to_string))
            .ok_or_else(|| BoardError::MissingConfigError {
                field: "tickets (--tickets or data.tickets_path)".to_string(),
            })?;

        let selection = if self.stops.is_empty() {
            file.selection()?.unwrap_or_default()
        } else {
            parse_selection(&self.stops)?
        };

        let overrides = self
            .rates
            .iter()
            .fold(RateTable::empty(), |table, (code, rate)| table.with_rate(code, *rate));

        Ok(Settings {
            tickets_path,
            validate_tickets: self.validate || file.validate_tickets(),
            currency: match self.currency {
                Some(currency) => currency,
                None => file.currency()?.unwrap_or_default(),
            },
            locale: match self.locale {
                Some(locale) => locale,
                None => file.locale()?.unwrap_or_default(),
            },
            format: match self.format {
                Some(format) => format,
                None => file.format()?.unwrap_or_default(),
            },
            selection,
            rates: file.rate_table().merged(&overrides),
        })
    }
}
