use crate::core::factory::TicketFactory;
use crate::core::normalizer::TimeNormalizer;
use crate::core::printer::{write_tickets, OutputFormat};
use crate::core::sorter::{sort_tickets, SortMode};
use crate::domain::model::{Ticket, TicketDraft};
use crate::domain::ports::Clock;
use crate::utils::error::{Result, TicketError};
use std::io::Write;

/// Drafts used when no run file is given.
pub fn default_drafts() -> Vec<TicketDraft> {
    vec![
        TicketDraft::new("Ticket 1", "First ticket", "closed"),
        TicketDraft::new("Ticket 2", "Second ticket", "open"),
        TicketDraft::new("Ticket 3", "Third ticket", "in-progress"),
    ]
}

pub fn default_passes() -> Vec<SortMode> {
    vec![SortMode::Time, SortMode::Status]
}

#[derive(Debug)]
pub struct RejectedDraft {
    pub draft: TicketDraft,
    pub error: TicketError,
}

#[derive(Debug)]
pub struct DemoReport {
    /// Working set after the last pass.
    pub tickets: Vec<Ticket>,
    pub rejected: Vec<RejectedDraft>,
    pub passes_run: usize,
}

pub struct DemoRunner<C: Clock> {
    factory: TicketFactory<C>,
    normalizer: TimeNormalizer,
    format: OutputFormat,
}

impl<C: Clock> DemoRunner<C> {
    pub fn new(factory: TicketFactory<C>, normalizer: TimeNormalizer, format: OutputFormat) -> Self {
        Self {
            factory,
            normalizer,
            format,
        }
    }

    /// Builds every draft it can, then writes one sorted listing per pass.
    ///
    /// Rejected drafts are logged and left out; only sink failures abort.
    pub fn run<W: Write>(
        &mut self,
        drafts: &[TicketDraft],
        passes: &[SortMode],
        sink: &mut W,
    ) -> Result<DemoReport> {
        tracing::info!("Building {} tickets", drafts.len());
        let (mut tickets, rejected) = self.build(drafts);
        tracing::info!("Built {} tickets, rejected {}", tickets.len(), rejected.len());

        for (i, mode) in passes.iter().enumerate() {
            if i > 0 {
                writeln!(sink)?;
            }
            tracing::debug!("Sorting {} tickets by {}", tickets.len(), mode);
            sort_tickets(&mut tickets, *mode);
            writeln!(sink, "{}", mode.header())?;
            write_tickets(sink, &tickets, self.format)?;
        }
        sink.flush()?;

        Ok(DemoReport {
            tickets,
            rejected,
            passes_run: passes.len(),
        })
    }

    fn build(&mut self, drafts: &[TicketDraft]) -> (Vec<Ticket>, Vec<RejectedDraft>) {
        let mut tickets = Vec::with_capacity(drafts.len());
        let mut rejected = Vec::new();

        for draft in drafts {
            match self.factory.create_from_draft(draft, &self.normalizer) {
                Ok(ticket) => tickets.push(ticket),
                Err(error) => {
                    tracing::warn!("Failed to build ticket {} | {}", draft, error);
                    tracing::debug!("Suggestion: {}", error.recovery_suggestion());
                    rejected.push(RejectedDraft {
                        draft: draft.clone(),
                        error,
                    });
                }
            }
        }

        (tickets, rejected)
    }
}
