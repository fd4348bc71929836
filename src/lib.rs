pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{JsonTicketSource, LocalStorage, StaticTicketSource};
pub use crate::app::render::{render_board, OutputFormat};
pub use crate::app::session::BoardSession;
pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::{
    board::{BoardEvent, TicketBoard, TicketRow},
    filter::{filter_tickets, StopAction, StopFlag, StopFlags, StopSelection},
    labels::{EnglishStopLabels, Locale, RussianStopLabels, StopLabels},
    pricing::{format_price, Currency, RateTable},
};
pub use crate::domain::model::{Ticket, TicketsFile};
pub use crate::utils::error::{BoardError, Result};
