use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing::{error, info};

use oddsmith::adapter::{ArcadeClient, OfflineChain, TheOddsApiClient};
use oddsmith::app::{self, Ports};
use oddsmith::config::Config;
use oddsmith::error::ConfigError;

#[derive(Parser)]
#[command(name = "oddsmith", about = "Quote a binary prediction market from sportsbook odds.")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!("oddsmith starting");

    // The binary ships no signing layer; live submission means embedding the
    // crate with a real transaction gateway.
    if !config.quoting.dry_run {
        let err = ConfigError::InvalidValue {
            field: "quoting.dry_run",
            reason: "this binary runs dry only; live quoting requires an embedded \
                     transaction gateway"
                .into(),
        };
        eprintln!("Failed to start: {err}");
        std::process::exit(1);
    }

    let api_key = config.odds.api_key.clone().unwrap_or_default();
    let chain = Arc::new(OfflineChain);
    let ports = Ports {
        odds: Arc::new(TheOddsApiClient::with_base_url(
            api_key,
            config.odds.api_url.clone(),
        )),
        catalog: Arc::new(ArcadeClient::new()),
        records: chain.clone(),
        wallet: chain.clone(),
        gateway: chain,
    };

    tokio::select! {
        result = app::run(config, ports) => {
            if let Err(e) = result {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("oddsmith stopped");
}
