use clap::Parser;
use ticket_sort::utils::error::ErrorSeverity;
use ticket_sort::utils::logger;
use ticket_sort::{CliConfig, DemoRunner, RunSettings, TicketFactory, TimeNormalizer};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting ticket-sort");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match RunSettings::from_cli(&config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration failed: {} (Category: {:?})", e, e.category());
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let factory = TicketFactory::new().with_validation(settings.validate);
    let normalizer = TimeNormalizer::new(settings.parse_mode);
    let mut runner = DemoRunner::new(factory, normalizer, settings.format);

    let stdout = std::io::stdout();
    let mut sink = stdout.lock();

    match runner.run(&settings.drafts, &settings.passes, &mut sink) {
        Ok(report) => {
            tracing::info!(
                "Printed {} tickets in {} passes ({} rejected)",
                report.tickets.len(),
                report.passes_run,
                report.rejected.len()
            );
        }
        Err(e) => {
            tracing::error!(
                "Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("{}", e.user_friendly_message());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium | ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 2,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
