use crate::core::board::{TicketBoard, TicketRow};
use crate::core::filter::StopFlag;
use crate::core::labels::Locale;
use crate::core::pricing::Currency;
use crate::utils::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Tsv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(BoardError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: "Valid formats: text, csv, tsv, json".to_string(),
            }),
        }
    }
}

const TABLE_HEADER: [&str; 13] = [
    "origin",
    "origin_name",
    "destination",
    "destination_name",
    "departure_date",
    "departure_time",
    "arrival_date",
    "arrival_time",
    "carrier",
    "stops",
    "stop_label",
    "price",
    "currency",
];

/// Writes the visible part of the board. An empty board still produces its
/// container: headers for text/CSV/TSV, `[]` for JSON.
pub fn render_board<W: Write>(
    board: &TicketBoard,
    locale: Locale,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let labels = locale.labels();
    let rows = board.rows(labels.as_ref());
    tracing::debug!("Rendering {} rows as {}", rows.len(), format);

    match format {
        OutputFormat::Text => render_text(board, locale, &rows, out),
        OutputFormat::Csv => render_delimited(&rows, b',', out),
        OutputFormat::Tsv => render_delimited(&rows, b'\t', out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn checkbox(checked: bool, caption: &str) -> String {
    format!("[{}] {}", if checked { "x" } else { " " }, caption)
}

fn render_text<W: Write>(
    board: &TicketBoard,
    locale: Locale,
    rows: &[TicketRow<'_>],
    out: &mut W,
) -> Result<()> {
    let labels = locale.labels();

    let currencies: Vec<String> = Currency::ALL
        .into_iter()
        .map(|c| {
            if c == board.currency() {
                format!("<{}>", c)
            } else {
                c.to_string()
            }
        })
        .collect();
    writeln!(out, "{}: {}", locale.currency_heading(), currencies.join(" "))?;

    let selection = board.selection();
    let mut boxes = vec![checkbox(selection.is_all(), &labels.all_caption())];
    boxes.extend(
        StopFlag::ALL
            .into_iter()
            .map(|flag| checkbox(selection.is_active(flag), &labels.flag_caption(flag))),
    );
    writeln!(out, "{}: {}", locale.filter_heading(), boxes.join("  "))?;
    writeln!(out)?;

    for row in rows {
        let ticket = row.ticket;
        writeln!(
            out,
            "{:<3} {} {}, {} {}  -- {} -->  {} {}, {} {}  | {}",
            ticket.carrier,
            ticket.departure_time,
            ticket.origin,
            ticket.origin_name,
            ticket.departure_date,
            row.stop_label,
            ticket.arrival_time,
            ticket.destination,
            ticket.destination_name,
            ticket.arrival_date,
            labels.price_tag(&row.display_price, row.currency.code()),
        )?;
    }
    Ok(())
}

fn render_delimited<W: Write>(rows: &[TicketRow<'_>], delimiter: u8, out: &mut W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(out);

    writer.write_record(TABLE_HEADER)?;
    for row in rows {
        let ticket = row.ticket;
        let stops = ticket.stops.to_string();
        writer.write_record([
            ticket.origin.as_str(),
            ticket.origin_name.as_str(),
            ticket.destination.as_str(),
            ticket.destination_name.as_str(),
            ticket.departure_date.as_str(),
            ticket.departure_time.as_str(),
            ticket.arrival_date.as_str(),
            ticket.arrival_time.as_str(),
            ticket.carrier.as_str(),
            stops.as_str(),
            row.stop_label.as_str(),
            row.display_price.as_str(),
            row.currency.code(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
