use crate::core::normalizer::ParseMode;
use crate::core::printer::OutputFormat;
use crate::core::sorter::SortMode;
use crate::domain::model::{TicketDraft, ZonedTimestamp};
use crate::utils::error::{Result, TicketError};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_one_of, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TIMEZONE: &str = "UTC";

/// Optional run file feeding tickets and switches into the demo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunFile {
    pub demo: Option<DemoConfig>,
    pub factory: Option<FactoryConfig>,
    pub normalizer: Option<NormalizerConfig>,
    pub output: Option<OutputConfig>,
    #[serde(default)]
    pub tickets: Vec<TicketEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    pub sort_modes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactoryConfig {
    pub validate: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

// Missing text fields default to empty so the factory, not the parser,
// decides whether the ticket is acceptable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    pub created_at: Option<String>,
    pub timezone: Option<String>,
}

impl TicketEntry {
    pub fn to_draft(&self) -> TicketDraft {
        let draft = TicketDraft::new(&self.title, &self.description, &self.status);
        match &self.created_at {
            Some(text) => draft.with_timestamp(ZonedTimestamp::new(
                text,
                self.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE),
            )),
            None => draft,
        }
    }
}

impl RunFile {
    /// Loads and parses a run file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|source| TicketError::RunFileRead {
                path: path.as_ref().display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TicketError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TicketError::ConfigValidation {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(modes) = self.demo.as_ref().and_then(|d| d.sort_modes.as_ref()) {
            validate_non_empty_list("demo.sort_modes", modes)?;
            for mode in modes {
                validate_non_empty_string("demo.sort_modes", mode)?;
            }
        }

        if let Some(mode) = self.normalizer.as_ref().and_then(|n| n.mode.as_deref()) {
            validate_one_of("normalizer.mode", mode, &ParseMode::NAMES)?;
        }

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }

        for (i, entry) in self.tickets.iter().enumerate() {
            if entry.timezone.is_some() && entry.created_at.is_none() {
                return Err(TicketError::ConfigValidation {
                    field: format!("tickets[{}].timezone", i),
                    message: "timezone given without created_at".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Unrecognized mode names sort by time.
    pub fn sort_modes(&self) -> Option<Vec<SortMode>> {
        let modes = self.demo.as_ref()?.sort_modes.as_ref()?;
        Some(
            modes
                .iter()
                .map(|mode| {
                    let parsed = SortMode::from_mode_str(mode);
                    if parsed.as_str() != mode {
                        tracing::debug!("Unrecognized sort mode '{}', sorting by time", mode);
                    }
                    parsed
                })
                .collect(),
        )
    }

    pub fn factory_validates(&self) -> Option<bool> {
        self.factory.as_ref()?.validate
    }

    pub fn parse_mode(&self) -> Result<Option<ParseMode>> {
        self.normalizer
            .as_ref()
            .and_then(|n| n.mode.as_deref())
            .map(str::parse::<ParseMode>)
            .transpose()
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .map(str::parse::<OutputFormat>)
            .transpose()
    }

    pub fn drafts(&self) -> Vec<TicketDraft> {
        self.tickets.iter().map(TicketEntry::to_draft).collect()
    }
}

impl Validate for RunFile {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
