use crate::domain::model::Ticket;
use crate::utils::error::{Result, TicketError};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::str::FromStr;

const COLUMNS: [&str; 5] = ["id", "title", "description", "status", "created_at"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{ID:1 Title:... CreatedAt:...}` per ticket
    #[default]
    Text,
    /// One JSON object per line
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 4] = ["text", "json", "csv", "tsv"];
}

impl FromStr for OutputFormat {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            other => Err(TicketError::InvalidConfigValue {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Supported formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// Writes tickets in input order, one line (or row) each.
pub fn write_tickets<W: Write>(writer: &mut W, tickets: &[Ticket], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for ticket in tickets {
                writeln!(writer, "{}", ticket)?;
            }
        }
        OutputFormat::Json => {
            for ticket in tickets {
                serde_json::to_writer(&mut *writer, ticket)?;
                writeln!(writer)?;
            }
        }
        OutputFormat::Csv => write_delimited(writer, tickets, b',')?,
        OutputFormat::Tsv => write_delimited(writer, tickets, b'\t')?,
    }
    Ok(())
}

fn write_delimited<W: Write>(writer: &mut W, tickets: &[Ticket], delimiter: u8) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(COLUMNS)?;
    for ticket in tickets {
        csv_writer.write_record([
            ticket.id.to_string(),
            ticket.title.clone(),
            ticket.description.clone(),
            ticket.status.clone(),
            ticket.created_at.to_rfc3339(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn print_tickets(tickets: &[Ticket], format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_tickets(&mut handle, tickets, format)
}
