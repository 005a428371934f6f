//! Calendar bot CLI
//!
//! Runs the webhook server or a one-off scrape of the calendar page.

use std::path::PathBuf;

use calendar_bot::{
    error::Result,
    models::Config,
    pipeline,
    services::current_year,
    utils::http,
    webhook,
};
use clap::{Parser, Subcommand};

/// Academic-calendar webhook bot
#[derive(Parser, Debug)]
#[command(name = "calendar-bot", version, about = "Academic-calendar webhook bot")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the webhook (port from PORT or the config file)
    Serve,

    /// Fetch the calendar once and print the reply
    Scrape {
        /// Year to keep (default: current year)
        #[arg(long)]
        year: Option<i32>,

        /// Print the retained periods as JSON instead of the reply text
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
#[cfg(not(feature = "json-log"))]
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Initialize JSON logging; `log` records are bridged into tracing.
#[cfg(feature = "json-log")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::debug!("JSON logging initialized");
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    config.apply_env();

    match cli.command {
        Command::Serve => {
            config.validate()?;
            log::info!("Calendar bot starting...");
            webhook::serve(config).await?;
        }

        Command::Scrape { year, json } => {
            let year = year.unwrap_or_else(current_year);
            let client = http::create_async_client(&config.source)?;
            let report = pipeline::run_calendar(&config, &client, year).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report.periods)?);
            } else {
                println!("{}", report.text);
            }
        }

        Command::Validate => {
            log::info!("Validating configuration {}...", cli.config.display());

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}
