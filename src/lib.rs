pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{toml_config::RunFile, RunSettings};
pub use crate::core::{
    demo::{DemoReport, DemoRunner},
    factory::TicketFactory,
    normalizer::{ParseMode, TimeNormalizer},
    printer::{print_tickets, write_tickets, OutputFormat},
    sorter::{sort_tickets, sorted, SortMode},
};
pub use crate::domain::model::{Ticket, TicketDraft, ZonedTimestamp};
pub use crate::utils::error::{Result, TicketError};
