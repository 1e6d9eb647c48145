pub mod toml_config;

use crate::core::demo::{default_drafts, default_passes};
use crate::core::normalizer::ParseMode;
use crate::core::printer::OutputFormat;
use crate::core::sorter::SortMode;
use crate::domain::model::TicketDraft;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use self::toml_config::RunFile;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ticket-sort")]
#[command(about = "Build a few tickets and print them sorted by time and status")]
pub struct CliConfig {
    /// TOML run file with tickets and settings
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format (overrides the run file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Report bad timestamps and unknown timezones instead of falling back
    #[arg(long)]
    pub strict: bool,

    /// Accept tickets with an empty title or status
    #[arg(long)]
    pub no_validate: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Everything one demo run needs, after merging defaults, the run file and
/// command-line overrides.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub drafts: Vec<TicketDraft>,
    pub passes: Vec<SortMode>,
    pub validate: bool,
    pub parse_mode: ParseMode,
    pub format: OutputFormat,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            drafts: default_drafts(),
            passes: default_passes(),
            validate: true,
            parse_mode: ParseMode::default(),
            format: OutputFormat::default(),
        }
    }
}

impl RunSettings {
    /// A run file without `[[tickets]]` keeps the built-in drafts.
    pub fn from_run_file(file: &RunFile) -> Result<Self> {
        file.validate()?;

        let mut settings = Self::default();
        if !file.tickets.is_empty() {
            settings.drafts = file.drafts();
        }
        if let Some(passes) = file.sort_modes() {
            settings.passes = passes;
        }
        if let Some(validate) = file.factory_validates() {
            settings.validate = validate;
        }
        if let Some(mode) = file.parse_mode()? {
            settings.parse_mode = mode;
        }
        if let Some(format) = file.output_format()? {
            settings.format = format;
        }
        Ok(settings)
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => {
                tracing::info!("Loading run file from: {}", path);
                Self::from_run_file(&RunFile::from_file(path)?)?
            }
            None => Self::default(),
        };

        if let Some(format) = cli.format {
            settings.format = format;
        }
        if cli.strict {
            settings.parse_mode = ParseMode::Strict;
        }
        if cli.no_validate {
            settings.validate = false;
        }
        Ok(settings)
    }
}
