// Adapters layer: concrete implementations of the domain ports.

pub mod source;
pub mod storage;

pub use source::{JsonTicketSource, StaticTicketSource};
pub use storage::LocalStorage;
