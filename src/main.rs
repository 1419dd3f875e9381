//! # Receipt Points CLI (`receipt-points`)
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `receipt-points serve` | Start the HTTP service |
//! | `receipt-points score <file>` | Score a receipt JSON file and print the points |
//! | `receipt-points check-config` | Validate configuration and print effective settings |
//!
//! ## Examples
//!
//! ```bash
//! # Serve on the default address (0.0.0.0:8080)
//! receipt-points serve
//!
//! # Serve with a config file, overriding the bind address
//! receipt-points --config ./receipt-points.toml serve --bind 127.0.0.1:9000
//!
//! # Show how each rule contributed to a receipt's points
//! receipt-points score ./receipt.json --explain
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use receipt_points::{config, score_cmd, server};

/// Receipt Points — score purchase receipts with loyalty points.
#[derive(Parser)]
#[command(name = "receipt-points", version, about)]
struct Cli {
    /// Path to configuration file (TOML). Defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP service.
    ///
    /// Receipts are kept in memory and are lost when the process exits.
    Serve {
        /// Address to listen on, overriding `[server].bind`.
        #[arg(long)]
        bind: Option<String>,
    },

    /// Score a receipt JSON file without starting the server.
    Score {
        /// Path to the receipt JSON file.
        file: PathBuf,

        /// Print each rule's contribution.
        #[arg(long)]
        explain: bool,

        /// Print the points and rule contributions as JSON.
        #[arg(long, conflicts_with = "explain")]
        json: bool,
    },

    /// Validate the configuration and print the effective settings.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::load_config(cli.config.as_deref())?;

    // RUST_LOG wins over [logging].level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.logging.level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                cfg.server.bind = bind;
            }
            server::run_server(&cfg).await?;
        }
        Commands::Score {
            file,
            explain,
            json,
        } => {
            score_cmd::run_score(&file, explain, json)?;
        }
        Commands::CheckConfig => {
            print!("{}", toml::to_string_pretty(&cfg)?);
        }
    }

    Ok(())
}
