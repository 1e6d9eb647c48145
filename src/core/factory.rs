use crate::core::normalizer::TimeNormalizer;
use crate::domain::model::{Ticket, TicketDraft};
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_text;
use chrono::{DateTime, Utc};

/// Builds tickets with sequential identifiers starting at 1.
///
/// The counter lives in the factory itself; callers hold the factory and the
/// `&mut self` receivers keep creation sequential.
#[derive(Debug)]
pub struct TicketFactory<C: Clock = SystemClock> {
    next_id: u64,
    validate: bool,
    clock: C,
}

impl TicketFactory<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TicketFactory<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TicketFactory<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            next_id: 1,
            validate: true,
            clock,
        }
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn validates(&self) -> bool {
        self.validate
    }

    /// Identifier the next successful call will assign.
    pub fn peek_next_id(&self) -> u64 {
        self.next_id
    }

    pub fn create_ticket(&mut self, title: &str, description: &str, status: &str) -> Result<Ticket> {
        let created_at = self.clock.now();
        self.create_ticket_at(title, description, status, created_at)
    }

    /// Rejected tickets never consume an identifier, so the next success
    /// reuses the number.
    pub fn create_ticket_at(
        &mut self,
        title: &str,
        description: &str,
        status: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Ticket> {
        if self.validate {
            validate_required_text("title", title)?;
            validate_required_text("status", status)?;
        }

        let ticket = Ticket {
            id: self.next_id,
            title: title.to_string(),
            description: description.to_string(),
            status: status.to_string(),
            created_at,
        };
        self.next_id += 1;

        tracing::debug!("Created ticket {} ({})", ticket.id, ticket.status);
        Ok(ticket)
    }

    /// Builds a ticket from a draft, normalizing its timestamp when it has one.
    pub fn create_from_draft(
        &mut self,
        draft: &TicketDraft,
        normalizer: &TimeNormalizer,
    ) -> Result<Ticket> {
        let created_at = match &draft.created_at {
            Some(timestamp) => normalizer.normalize_zoned(timestamp)?,
            None => self.clock.now(),
        };
        self.create_ticket_at(&draft.title, &draft.description, &draft.status, created_at)
    }
}
