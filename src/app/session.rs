use crate::app::render::render_board;
use crate::config::Settings;
use crate::core::board::TicketBoard;
use crate::core::TicketSource;
use crate::utils::error::Result;
use std::io::Write;

/// Load, set up and render a board in one go.
pub struct BoardSession<T: TicketSource> {
    source: T,
    settings: Settings,
}

impl<T: TicketSource> BoardSession<T> {
    pub fn new(source: T, settings: Settings) -> Self {
        Self { source, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Loads the tickets and applies the configured filter and currency.
    pub async fn open(&self) -> Result<TicketBoard> {
        let tickets = self.source.load().await?;

        let mut board = TicketBoard::with_rates(tickets, self.settings.rates.clone());
        board.set_selection(self.settings.selection.clone());
        board.select_currency(self.settings.currency);

        tracing::info!(
            "Showing {} of {} tickets (stops: {}, currency: {})",
            board.visible_len(),
            board.tickets().len(),
            board.selection(),
            board.currency()
        );
        Ok(board)
    }

    /// Renders the board to `out` and returns the number of visible tickets.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<usize> {
        let board = self.open().await?;
        render_board(&board, self.settings.locale, self.settings.format, out)?;
        Ok(board.visible_len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticTicketSource;
    use crate::app::render::OutputFormat;
    use crate::core::filter::{StopFlag, StopSelection};
    use crate::core::labels::Locale;
    use crate::core::pricing::{Currency, RateTable};
    use crate::domain::model::test_ticket;

    fn settings() -> Settings {
        Settings {
            tickets_path: "unused.json".to_string(),
            validate_tickets: false,
            currency: Currency::Usd,
            locale: Locale::En,
            format: OutputFormat::Csv,
            selection: StopSelection::only([StopFlag::OneStop]),
            rates: RateTable::standard(),
        }
    }

    #[tokio::test]
    async fn test_open_applies_settings() {
        let source = StaticTicketSource::new(vec![test_ticket(0, 100.0), test_ticket(1, 200.0)]);
        let session = BoardSession::new(source, settings());

        let board = session.open().await.unwrap();
        assert_eq!(board.visible_len(), 1);
        assert_eq!(board.currency(), Currency::Usd);
    }

    #[tokio::test]
    async fn test_run_renders_rows() {
        let source = StaticTicketSource::new(vec![test_ticket(1, 1000.0)]);
        let session = BoardSession::new(source, settings());

        let mut out = Vec::new();
        let count = session.run(&mut out).await.unwrap();
        assert_eq!(count, 1);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1 stop,10.00,USD"));
    }
}
