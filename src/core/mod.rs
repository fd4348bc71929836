pub mod board;
pub mod filter;
pub mod labels;
pub mod pricing;

pub use crate::domain::model::{Ticket, TicketsFile};
pub use crate::domain::ports::{Storage, TicketSource};
pub use crate::utils::error::Result;
