//! Human-readable stop labels and captions.
//!
//! Pluralization depends on the display language, so labels sit behind the
//! [`StopLabels`] trait instead of a hard-coded branch.

use crate::core::filter::StopFlag;
use crate::utils::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub trait StopLabels: Send + Sync {
    /// Label for a ticket with `stops` layovers.
    fn label(&self, stops: u32) -> String;

    /// Caption of the "all" checkbox.
    fn all_caption(&self) -> String;

    /// Caption of a filter checkbox. Defaults to the ticket label for that count.
    fn flag_caption(&self, flag: StopFlag) -> String {
        self.label(flag.stops())
    }

    /// Caption of the purchase button.
    fn price_tag(&self, amount: &str, code: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RussianStopLabels;

impl StopLabels for RussianStopLabels {
    fn label(&self, stops: u32) -> String {
        if stops == 0 {
            return "Без пересадок".to_string();
        }
        let word = match (stops % 10, stops % 100) {
            (1, rem) if rem != 11 => "пересадка",
            (2..=4, rem) if !(12..=14).contains(&rem) => "пересадки",
            _ => "пересадок",
        };
        format!("{} {}", stops, word)
    }

    fn all_caption(&self) -> String {
        "Все".to_string()
    }

    fn price_tag(&self, amount: &str, code: &str) -> String {
        format!("Купить {} {}", amount, code)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishStopLabels;

impl StopLabels for EnglishStopLabels {
    fn label(&self, stops: u32) -> String {
        match stops {
            0 => "no stops".to_string(),
            1 => "1 stop".to_string(),
            n => format!("{} stops", n),
        }
    }

    fn all_caption(&self) -> String {
        "All".to_string()
    }

    fn price_tag(&self, amount: &str, code: &str) -> String {
        format!("Buy {} {}", amount, code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn labels(self) -> Box<dyn StopLabels> {
        match self {
            Locale::Ru => Box::new(RussianStopLabels),
            Locale::En => Box::new(EnglishStopLabels),
        }
    }

    pub fn currency_heading(self) -> &'static str {
        match self {
            Locale::Ru => "Валюта",
            Locale::En => "Currency",
        }
    }

    pub fn filter_heading(self) -> &'static str {
        match self {
            Locale::Ru => "Количество пересадок",
            Locale::En => "Number of stops",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ru => f.write_str("ru"),
            Locale::En => f.write_str("en"),
        }
    }
}

impl FromStr for Locale {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            _ => Err(BoardError::InvalidConfigValueError {
                field: "locale".to_string(),
                value: s.to_string(),
                reason: "Supported locales: ru, en".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_russian_labels() {
        let labels = RussianStopLabels;
        assert_eq!(labels.label(0), "Без пересадок");
        assert_eq!(labels.label(1), "1 пересадка");
        assert_eq!(labels.label(2), "2 пересадки");
        assert_eq!(labels.label(3), "3 пересадки");
        assert_eq!(labels.label(5), "5 пересадок");
        assert_eq!(labels.label(11), "11 пересадок");
        assert_eq!(labels.label(21), "21 пересадка");
        assert_eq!(labels.label(22), "22 пересадки");
    }

    #[test]
    fn test_english_labels() {
        let labels = EnglishStopLabels;
        assert_eq!(labels.label(0), "no stops");
        assert_eq!(labels.label(1), "1 stop");
        assert_eq!(labels.label(4), "4 stops");
    }

    #[test]
    fn test_captions() {
        let labels = Locale::Ru.labels();
        assert_eq!(labels.all_caption(), "Все");
        assert_eq!(labels.flag_caption(StopFlag::TwoStops), "2 пересадки");
        assert_eq!(labels.price_tag("124.00", "USD"), "Купить 124.00 USD");

        let labels = Locale::En.labels();
        assert_eq!(labels.flag_caption(StopFlag::NonStop), "no stops");
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
    }
}
