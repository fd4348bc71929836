use crate::domain::model::{Ticket, TicketsFile};
use crate::domain::ports::{Storage, TicketSource};
use crate::utils::error::Result;
use crate::utils::validation::validate_ticket;
use async_trait::async_trait;

/// Loads the `{"tickets": [...]}` data file through a [`Storage`].
pub struct JsonTicketSource<S: Storage> {
    storage: S,
    path: String,
    validate: bool,
}

impl<S: Storage> JsonTicketSource<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
            validate: false,
        }
    }

    /// Reject malformed records at load time instead of trusting the file.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn parse(data: &[u8]) -> Result<Vec<Ticket>> {
        let file: TicketsFile = serde_json::from_slice(data)?;
        Ok(file.tickets)
    }
}

#[async_trait]
impl<S: Storage> TicketSource for JsonTicketSource<S> {
    async fn load(&self) -> Result<Vec<Ticket>> {
        let data = self.storage.read_file(&self.path).await?;
        let tickets = Self::parse(&data)?;

        if self.validate {
            for (index, ticket) in tickets.iter().enumerate() {
                validate_ticket(index, ticket)?;
            }
        }

        tracing::info!("Loaded {} tickets from {}", tickets.len(), self.path);
        Ok(tickets)
    }
}

/// In-memory source, handy for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticTicketSource {
    tickets: Vec<Ticket>,
}

impl StaticTicketSource {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }
}

#[async_trait]
impl TicketSource for StaticTicketSource {
    async fn load(&self) -> Result<Vec<Ticket>> {
        Ok(self.tickets.clone())
    }
}
