use crate::domain::model::Ticket;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// Supplies the full ticket collection once, at start-up.
#[async_trait]
pub trait TicketSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Ticket>>;
}
