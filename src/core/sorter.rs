use crate::domain::model::Ticket;
use std::cmp::Ordering;
use std::fmt;

pub const SORT_MODE_TIME: &str = "time";
pub const SORT_MODE_STATUS: &str = "status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Most recent first.
    #[default]
    Time,
    /// Status ascending, most recent first within a status.
    Status,
}

impl SortMode {
    /// Any string other than `"status"` selects time ordering.
    pub fn from_mode_str(mode: &str) -> Self {
        match mode {
            SORT_MODE_STATUS => Self::Status,
            _ => Self::Time,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Time => SORT_MODE_TIME,
            Self::Status => SORT_MODE_STATUS,
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Self::Time => "Sorted by Time:",
            Self::Status => "Sorted by Status:",
        }
    }

    pub fn compare(&self, a: &Ticket, b: &Ticket) -> Ordering {
        match self {
            Self::Time => newest_first(a, b),
            Self::Status => a.status.cmp(&b.status).then_with(|| newest_first(a, b)),
        }
    }
}

impl From<&str> for SortMode {
    fn from(mode: &str) -> Self {
        Self::from_mode_str(mode)
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn newest_first(a: &Ticket, b: &Ticket) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

/// Sorts in place. `sort_by` is stable, so tickets with equal keys keep
/// their input order.
pub fn sort_tickets(tickets: &mut [Ticket], mode: SortMode) {
    tickets.sort_by(|a, b| mode.compare(a, b));
}

pub fn sorted(tickets: &[Ticket], mode: SortMode) -> Vec<Ticket> {
    let mut copy = tickets.to_vec();
    sort_tickets(&mut copy, mode);
    copy
}
