use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A work item. Built once by the factory and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ID:{} Title:{} Description:{} Status:{} CreatedAt:{}}}",
            self.id,
            self.title,
            self.description,
            self.status,
            self.created_at.to_rfc3339()
        )
    }
}

/// Raw creation time as supplied by the caller, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonedTimestamp {
    pub text: String,
    pub timezone: String,
}

impl ZonedTimestamp {
    pub fn new(text: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timezone: timezone.into(),
        }
    }
}

/// Input to the factory. Without a timestamp the factory clock decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: Option<ZonedTimestamp>,
}

impl TicketDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: status.into(),
            created_at: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: ZonedTimestamp) -> Self {
        self.created_at = Some(timestamp);
        self
    }
}

impl fmt::Display for TicketDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.title, self.description, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ticket_display_lists_every_field() {
        let ticket = Ticket {
            id: 1,
            title: "Ticket 1".to_string(),
            description: "First ticket".to_string(),
            status: "closed".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        };

        assert_eq!(
            ticket.to_string(),
            "{ID:1 Title:Ticket 1 Description:First ticket Status:closed CreatedAt:2024-03-01T09:00:00+00:00}"
        );
    }

    #[test]
    fn test_draft_display() {
        let draft = TicketDraft::new("", "No title", "open");
        assert_eq!(draft.to_string(), "(, No title, open)");
    }
}
