use serde::{Deserialize, Serialize};

/// A single flight offer as it appears in the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub origin: String,
    pub origin_name: String,
    pub destination: String,
    pub destination_name: String,
    pub departure_date: String,
    pub departure_time: String,
    pub arrival_date: String,
    pub arrival_time: String,
    pub carrier: String,
    pub stops: u32,
    /// Price in the canonical currency (RUB).
    pub price: f64,
}

/// Envelope of the tickets data file: `{"tickets": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketsFile {
    pub tickets: Vec<Ticket>,
}

#[cfg(test)]
pub(crate) fn test_ticket(stops: u32, price: f64) -> Ticket {
    Ticket {
        origin: "VVO".to_string(),
        origin_name: "Владивосток".to_string(),
        destination: "TLV".to_string(),
        destination_name: "Тель-Авив".to_string(),
        departure_date: "12.05.18".to_string(),
        departure_time: "16:20".to_string(),
        arrival_date: "12.05.18".to_string(),
        arrival_time: "22:10".to_string(),
        carrier: "TK".to_string(),
        stops,
        price,
    }
}
