pub mod demo;
pub mod factory;
pub mod normalizer;
pub mod printer;
pub mod sorter;

pub use crate::domain::model::{Ticket, TicketDraft, ZonedTimestamp};
pub use crate::domain::ports::{Clock, SystemClock};
pub use crate::utils::error::Result;
