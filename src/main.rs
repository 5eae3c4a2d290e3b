use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uptime_monitor::config;
use uptime_monitor::lifecycle::{signals, Shutdown};
use uptime_monitor::monitor::{BurstRunner, ThresholdMonitor};
use uptime_monitor::notify;

#[derive(Parser)]
#[command(name = "uptime-monitor")]
#[command(about = "Single-target uptime monitor with rate-limited alerting", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the long-lived monitor: probe on an interval, alert on
    /// sustained outage
    Watch,
    /// Run one finite burst of probes and exit with a verdict
    Burst,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uptime_monitor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration error");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        target = %config.target_url,
        "uptime-monitor starting"
    );

    let notifier = match notify::from_config(&config.notifier) {
        Some(notifier) => notifier,
        None => {
            tracing::error!("no notification transport configured");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Watch => {
            let shutdown = Shutdown::new();
            let receiver = shutdown.subscribe();
            tokio::spawn(signals::listen(shutdown));

            ThresholdMonitor::new(&config, notifier).run(receiver).await;

            tracing::info!("shutdown complete");
            ExitCode::SUCCESS
        }
        Commands::Burst => {
            let outcome = BurstRunner::new(&config, notifier).run().await;
            ExitCode::from(outcome.exit_code())
        }
    }
}
