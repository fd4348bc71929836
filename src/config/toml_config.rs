use crate::app::render::OutputFormat;
use crate::core::filter::{parse_selection, StopSelection};
use crate::core::labels::Locale;
use crate::core::pricing::{Currency, RateTable};
use crate::utils::error::{BoardError, Result};
use crate::utils::validation::{
    validate_currency_code, validate_path, validate_rate, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub data: Option<DataConfig>,
    pub display: Option<DisplayConfig>,
    pub filter: Option<FilterConfig>,
    pub rates: Option<BTreeMap<String, f64>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    pub tickets_path: Option<String>,
    pub validate: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency: Option<String>,
    pub locale: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub stops: Option<Vec<String>>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BoardError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn tickets_path(&self) -> Option<&str> {
        self.data.as_ref()?.tickets_path.as_deref()
    }

    pub fn validate_tickets(&self) -> bool {
        self.data.as_ref().and_then(|d| d.validate).unwrap_or(false)
    }

    pub fn currency(&self) -> Result<Option<Currency>> {
        self.display
            .as_ref()
            .and_then(|d| d.currency.as_deref())
            .map(str::parse)
            .transpose()
    }

    pub fn locale(&self) -> Result<Option<Locale>> {
        self.display
            .as_ref()
            .and_then(|d| d.locale.as_deref())
            .map(str::parse)
            .transpose()
    }

    pub fn format(&self) -> Result<Option<OutputFormat>> {
        self.display
            .as_ref()
            .and_then(|d| d.format.as_deref())
            .map(str::parse)
            .transpose()
    }

    pub fn selection(&self) -> Result<Option<StopSelection>> {
        self.filter
            .as_ref()
            .and_then(|f| f.stops.as_deref())
            .map(parse_selection)
            .transpose()
    }

    /// Standard rates with the `[rates]` section laid over them.
    pub fn rate_table(&self) -> RateTable {
        let overrides = self
            .rates
            .iter()
            .flatten()
            .fold(RateTable::empty(), |table, (code, rate)| table.with_rate(code, *rate));
        RateTable::standard().merged(&overrides)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.tickets_path() {
            validate_path("data.tickets_path", path)?;
        }

        for (code, rate) in self.rates.iter().flatten() {
            validate_currency_code("rates", code)?;
            validate_rate(&format!("rates.{}", code), *rate)?;
        }

        self.currency()?;
        self.locale()?;
        self.format()?;
        self.selection()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::StopFlag;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[data]
tickets_path = "data/tickets.json"
validate = true

[display]
currency = "usd"
locale = "en"
format = "csv"

[filter]
stops = ["nonStop", "twoStops"]

[rates]
USD = 0.011
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.tickets_path(), Some("data/tickets.json"));
        assert!(config.validate_tickets());
        assert_eq!(config.currency().unwrap(), Some(Currency::Usd));
        assert_eq!(config.locale().unwrap(), Some(Locale::En));
        assert_eq!(config.format().unwrap(), Some(OutputFormat::Csv));
        assert_eq!(
            config.selection().unwrap(),
            Some(StopSelection::only([StopFlag::NonStop, StopFlag::TwoStops]))
        );

        let rates = config.rate_table();
        assert_eq!(rates.get("USD"), Some(0.011));
        assert_eq!(rates.get("EUR"), Some(0.0095));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.tickets_path(), None);
        assert_eq!(config.currency().unwrap(), None);
        assert_eq!(config.rate_table(), RateTable::standard());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TICKET_BOARD_TEST_PATH", "/srv/tickets.json");

        let toml_content = r#"
[data]
tickets_path = "${TICKET_BOARD_TEST_PATH}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.tickets_path(), Some("/srv/tickets.json"));

        std::env::remove_var("TICKET_BOARD_TEST_PATH");
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let bad_rate = TomlConfig::from_toml_str("[rates]\nUSD = 0.0\n").unwrap();
        assert!(bad_rate.validate().is_err());

        let bad_code = TomlConfig::from_toml_str("[rates]\nusd = 0.01\n").unwrap();
        assert!(bad_code.validate().is_err());

        let bad_currency = TomlConfig::from_toml_str("[display]\ncurrency = \"GBP\"\n").unwrap();
        assert!(matches!(
            bad_currency.validate(),
            Err(BoardError::UnknownCurrency { .. })
        ));

        let bad_stops = TomlConfig::from_toml_str("[filter]\nstops = [\"direct\"]\n").unwrap();
        assert!(matches!(
            bad_stops.validate(),
            Err(BoardError::UnknownStopFlag { .. })
        ));
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(
            TomlConfig::from_toml_str("[data"),
            Err(BoardError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\nlocale = \"ru\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.locale().unwrap(), Some(Locale::Ru));
    }
}
