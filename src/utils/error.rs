use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketError {
    #[error("Validation error: {field} {reason}")]
    Validation { field: String, reason: String },

    #[error("Timestamp parse error: '{input}': {reason}")]
    TimestampParse { input: String, reason: String },

    #[error("Unknown timezone: {name}")]
    UnknownTimezone { name: String },

    #[error("Cannot read run file {path}: {source}")]
    RunFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Ticket,
    Timestamp,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TicketError {
    pub fn validation(field: &str, reason: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } => ErrorCategory::Ticket,
            Self::TimestampParse { .. } | Self::UnknownTimezone { .. } => {
                ErrorCategory::Timestamp
            }
            Self::RunFileRead { .. }
            | Self::ConfigValidation { .. }
            | Self::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            Self::Io(_) | Self::Serialization(_) | Self::Csv(_) => ErrorCategory::Output,
        }
    }

    /// Ticket-level failures only drop one ticket; the run carries on.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Ticket | ErrorCategory::Timestamp => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "Provide a non-empty title and status for the ticket",
            Self::TimestampParse { .. } => {
                "Use an RFC 3339 timestamp such as 2024-03-01T09:00:00+02:00"
            }
            Self::UnknownTimezone { .. } => {
                "Use an IANA timezone name such as Europe/Berlin, or drop --strict"
            }
            Self::RunFileRead { .. } => "Check that the --config path exists and is readable",
            Self::ConfigValidation { .. } | Self::InvalidConfigValue { .. } => {
                "Check the run file against the documented [demo], [output] and [[tickets]] tables"
            }
            Self::Io(_) | Self::Serialization(_) | Self::Csv(_) => {
                "Check that standard output is writable"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Ticket => format!("Ticket rejected: {}", self),
            ErrorCategory::Timestamp => format!("Ticket timestamp rejected: {}", self),
            ErrorCategory::Configuration => format!("Run file is invalid: {}", self),
            ErrorCategory::Output => format!("Could not write tickets: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TicketError>;
