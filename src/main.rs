use std::path::Path;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lcr_stats::api::IcertClient;
use lcr_stats::models::Config;
use lcr_stats::report;
use lcr_stats::states::StateTable;
use lcr_stats::stats::StatsCollector;

/// H-2A labor certification experience statistics from the DOL iCERT
/// reporting endpoint
#[derive(Parser)]
#[command(name = "lcr-stats")]
struct Cli {
    /// How to aggregate the fetched counts
    #[arg(value_enum)]
    aggregation: Aggregation,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Aggregation {
    /// One row per fiscal year across all states
    Overall,
    /// One row per fiscal year and state
    #[value(name = "by_state")]
    ByState,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for the CSV report
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lcr_stats=info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let client = IcertClient::new(&config)?;
    let collector = StatsCollector::new(client);

    match cli.aggregation {
        Aggregation::Overall => {
            info!("Fetching overall annual stats");
            let rows = collector.get_annual_stats(None).await?;
            report::write_annual_csv(std::io::stdout(), &rows)?;
        }
        Aggregation::ByState => {
            let states = StateTable::load(Path::new(&config.state_ids_path))?;
            info!("Fetching annual stats for {} states", states.len());
            let rows = collector.get_state_stats(&states).await?;
            report::write_state_csv(std::io::stdout(), &rows)?;
        }
    }

    Ok(())
}
