mod adapters;
mod application;
mod config;
mod domain;
mod error;
mod interface;
mod ports;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adapters::{OsAdapter, SystemClock};
use application::ReportService;
use config::Config;
use interface::{console, Cli};

/// Exit status for failures before a status could be evaluated
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let config = Config::from_cli(Cli::parse());

    // Diagnostics go to stderr; stdout carries the run summary
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("diskreport={}", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("diskreport v{}", env!("CARGO_PKG_VERSION"));
    debug!("Configuration: {:?}", config);

    let os = OsAdapter::new();
    let service = ReportService::new(
        Box::new(os.disk_source()),
        Box::new(os.system_source()),
        Box::new(SystemClock),
        config,
    );

    match service.run() {
        Ok(outcome) => {
            info!(
                status = %outcome.status,
                log = %outcome.log_file.display(),
                "Run complete"
            );
            console::print_summary(&outcome);
            ExitCode::from(outcome.status.exit_code())
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
