use crate::domain::model::ZonedTimestamp;
use crate::utils::error::{Result, TicketError};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

/// Byte offset of the date/time separator in RFC 3339 text.
const SEPARATOR_INDEX: usize = 10;

/// How timestamp and timezone failures are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Unknown zones fall back to UTC and unparseable text becomes
    /// [`zero_time`].
    #[default]
    Permissive,
    /// Every failure is reported to the caller.
    Strict,
}

impl ParseMode {
    pub const NAMES: [&'static str; 2] = ["permissive", "strict"];
}

impl FromStr for ParseMode {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(TicketError::InvalidConfigValue {
                field: "normalizer.mode".to_string(),
                value: other.to_string(),
                reason: format!("Supported values: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// The instant given to tickets whose timestamp could not be read in
/// permissive mode. It is earlier than any real timestamp, so such tickets
/// sort last under most-recent-first ordering.
pub fn zero_time() -> DateTime<Utc> {
    DateTime::<Utc>::MIN_UTC
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeNormalizer {
    mode: ParseMode,
}

impl TimeNormalizer {
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Resolves `text` in `timezone` to an absolute UTC instant.
    ///
    /// Only RFC 3339 text with an explicit offset is accepted; the offset
    /// alone fixes the instant, the zone just has to resolve.
    pub fn normalize(&self, text: &str, timezone: &str) -> Result<DateTime<Utc>> {
        let tz = self.resolve_timezone(timezone)?;

        match parse_in_zone(text, tz) {
            Ok(instant) => Ok(instant),
            Err(e) if self.mode == ParseMode::Permissive => {
                tracing::debug!("Discarding unreadable timestamp '{}': {}", text, e);
                Ok(zero_time())
            }
            Err(e) => Err(e),
        }
    }

    pub fn normalize_zoned(&self, timestamp: &ZonedTimestamp) -> Result<DateTime<Utc>> {
        self.normalize(&timestamp.text, &timestamp.timezone)
    }

    fn resolve_timezone(&self, name: &str) -> Result<Tz> {
        match name.parse::<Tz>() {
            Ok(tz) => Ok(tz),
            Err(_) if self.mode == ParseMode::Permissive => {
                tracing::debug!("Unknown timezone '{}', using UTC", name);
                Ok(Tz::UTC)
            }
            Err(_) => Err(TicketError::UnknownTimezone {
                name: name.to_string(),
            }),
        }
    }
}

fn parse_in_zone(text: &str, tz: Tz) -> Result<DateTime<Utc>> {
    // chrono also takes a space or a lowercase `t` here; RFC 3339 proper does not.
    if text.as_bytes().get(SEPARATOR_INDEX) != Some(&b'T') {
        return Err(TicketError::TimestampParse {
            input: text.to_string(),
            reason: "expected 'T' between date and time".to_string(),
        });
    }

    let parsed = DateTime::parse_from_rfc3339(text).map_err(|e| TicketError::TimestampParse {
        input: text.to_string(),
        reason: e.to_string(),
    })?;

    Ok(parsed.with_timezone(&tz).with_timezone(&Utc))
}
