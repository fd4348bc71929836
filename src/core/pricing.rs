//! Display prices in the selected currency.
//!
//! Ticket prices are stored in RUB. Conversion uses a fixed rate table that
//! callers pass in explicitly; nothing here fetches or refreshes rates.

use crate::utils::error::BoardError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Rub,
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Rub, Currency::Usd, Currency::Eur];

    /// The currency ticket prices are stored in.
    pub const CANONICAL: Currency = Currency::Rub;

    pub fn code(self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| BoardError::UnknownCurrency {
                code: s.to_string(),
            })
    }
}

/// Conversion factors from one canonical unit to one unit of the target code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    pub fn empty() -> Self {
        Self {
            rates: BTreeMap::new(),
        }
    }

    /// RUB 1, USD 0.01, EUR 0.0095.
    pub fn standard() -> Self {
        Self::empty()
            .with_rate("RUB", 1.0)
            .with_rate("USD", 0.01)
            .with_rate("EUR", 0.0095)
    }

    pub fn with_rate(mut self, code: &str, rate: f64) -> Self {
        self.rates.insert(code.to_string(), rate);
        self
    }

    /// Overlays `other` on top of this table.
    pub fn merged(mut self, other: &RateTable) -> Self {
        for (code, rate) in &other.rates {
            self.rates.insert(code.clone(), *rate);
        }
        self
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Rate for `code`, or 1.0 when the table has no entry.
    pub fn rate(&self, code: &str) -> f64 {
        match self.get(code) {
            Some(rate) => rate,
            None => {
                tracing::debug!("No exchange rate for {}, showing canonical amount", code);
                1.0
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn convert(price: f64, target: &str, rates: &RateTable) -> f64 {
    price * rates.rate(target)
}

/// `price` converted into `target` with exactly two fractional digits.
pub fn format_price(price: f64, target: &str, rates: &RateTable) -> String {
    format!("{:.2}", convert(price, target, rates))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_standard_rates() {
        let rates = RateTable::standard();
        assert_eq!(format_price(1000.0, "RUB", &rates), "1000.00");
        assert_eq!(format_price(1000.0, "USD", &rates), "10.00");
        assert_eq!(format_price(1000.0, "EUR", &rates), "9.50");
    }

    #[test]
    fn test_unknown_code_falls_back_to_identity() {
        let rates = RateTable::standard();
        assert_eq!(format_price(1000.0, "GBP", &rates), "1000.00");
        assert_eq!(format_price(1000.0, "", &RateTable::empty()), "1000.00");
    }

    #[test]
    fn test_always_two_decimals() {
        let rates = RateTable::standard();
        assert_eq!(format_price(0.0, "RUB", &rates), "0.00");
        assert_eq!(format_price(12400.0, "USD", &rates), "124.00");
        assert_eq!(format_price(12345.0, "USD", &rates), "123.45");
    }

    #[test]
    fn test_rounds_instead_of_truncating() {
        let rates = RateTable::empty().with_rate("XXX", 1.0);
        assert_eq!(format_price(2.678, "XXX", &rates), "2.68");
        assert_eq!(format_price(0.999, "XXX", &rates), "1.00");
    }

    #[test]
    fn test_substituted_table() {
        let rates = RateTable::standard().merged(&RateTable::empty().with_rate("USD", 0.02));
        assert_eq!(format_price(1000.0, "USD", &rates), "20.00");
        assert_eq!(rates.get("EUR"), Some(0.0095));
        assert_eq!(rates.len(), 3);
    }

    #[test]
    fn test_currency_parsing() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" EUR ".parse::<Currency>().unwrap(), Currency::Eur);
        assert!("GBP".parse::<Currency>().is_err());
        assert_eq!(Currency::default(), Currency::CANONICAL);
    }
}
