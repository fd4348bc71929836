use crate::domain::model::Ticket;
use crate::utils::error::{BoardError, Result};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

pub const TICKET_DATE_FORMAT: &str = "%d.%m.%y";
pub const TICKET_TIME_FORMAT: &str = "%H:%M";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BoardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BoardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_currency_code(field_name: &str, code: &str) -> Result<()> {
    static CODE: OnceLock<Regex> = OnceLock::new();
    let re = CODE.get_or_init(|| Regex::new(r"^[A-Z]{3}$").expect("static regex"));

    if !re.is_match(code) {
        return Err(BoardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "Currency codes are three uppercase letters".to_string(),
        });
    }
    Ok(())
}

pub fn validate_rate(field_name: &str, rate: f64) -> Result<()> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(BoardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: rate.to_string(),
            reason: "Exchange rate must be a finite positive number".to_string(),
        });
    }
    Ok(())
}

/// Checks one record at the loader boundary. The filter and price code
/// downstream assume records that pass this.
pub fn validate_ticket(index: usize, ticket: &Ticket) -> Result<()> {
    let invalid = |reason: String| BoardError::InvalidTicket { index, reason };

    if !ticket.price.is_finite() || ticket.price < 0.0 {
        return Err(invalid(format!("price {} is not a non-negative number", ticket.price)));
    }

    for (field, value) in [("origin", &ticket.origin), ("destination", &ticket.destination)] {
        if value.trim().is_empty() {
            return Err(invalid(format!("{} code is empty", field)));
        }
    }

    for (field, value) in [
        ("departure_date", &ticket.departure_date),
        ("arrival_date", &ticket.arrival_date),
    ] {
        NaiveDate::parse_from_str(value, TICKET_DATE_FORMAT)
            .map_err(|e| invalid(format!("{} '{}': {}", field, value, e)))?;
    }

    for (field, value) in [
        ("departure_time", &ticket.departure_time),
        ("arrival_time", &ticket.arrival_time),
    ] {
        NaiveTime::parse_from_str(value, TICKET_TIME_FORMAT)
            .map_err(|e| invalid(format!("{} '{}': {}", field, value, e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::test_ticket;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data.tickets_path", "tickets.json").is_ok());
        assert!(validate_path("data.tickets_path", "").is_err());
        assert!(validate_path("data.tickets_path", "a\0b").is_err());
    }

    #[test]
    fn test_validate_currency_code() {
        assert!(validate_currency_code("rates", "RUB").is_ok());
        assert!(validate_currency_code("rates", "rub").is_err());
        assert!(validate_currency_code("rates", "RUBL").is_err());
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate("rates.USD", 0.01).is_ok());
        assert!(validate_rate("rates.USD", 0.0).is_err());
        assert!(validate_rate("rates.USD", -1.0).is_err());
        assert!(validate_rate("rates.USD", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_ticket() {
        let ticket = test_ticket(1, 12400.0);
        assert!(validate_ticket(0, &ticket).is_ok());

        let mut negative = ticket.clone();
        negative.price = -5.0;
        assert!(matches!(
            validate_ticket(3, &negative),
            Err(BoardError::InvalidTicket { index: 3, .. })
        ));

        let mut bad_date = ticket.clone();
        bad_date.arrival_date = "2018-05-12".to_string();
        assert!(validate_ticket(0, &bad_date).is_err());

        let mut bad_time = ticket;
        bad_time.departure_time = "25:61".to_string();
        assert!(validate_ticket(0, &bad_time).is_err());
    }
}
