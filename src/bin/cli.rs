//! TagPulse CLI
//!
//! Terminal client for hashtag trend lookups. Resolves a hashtag through the
//! fetch state machine (local dataset by default, a running TagPulse API
//! with `--server`) and prints the derived analytics.
//!
//! # Examples
//!
//! ```text
//! tagpulse-cli trend react
//! tagpulse-cli trend "#nextjs" --json
//! tagpulse-cli trend uri --server http://localhost:8082
//! tagpulse-cli hashtags
//! ```

use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;

use tagpulse::analytics::{analyze, Direction};
use tagpulse::config::Config;
use tagpulse::dataset::TrendDataset;
use tagpulse::fetch::{FetchClient, FetchConfig, FetchState};
use tagpulse::lookup::{DatasetLookup, HttpLookup, TrendLookup};

#[derive(Parser)]
#[command(name = "tagpulse-cli", about = "Hashtag sentiment trend client", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a hashtag's trend and print its analytics
    Trend {
        /// Hashtag to look up (leading # optional)
        hashtag: String,

        /// Base URL of a running TagPulse API; omit to use the built-in dataset
        #[arg(long)]
        server: Option<String>,

        /// Print the raw series and analytics as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available hashtag keys
    Hashtags,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tagpulse=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Trend {
            hashtag,
            server,
            json,
        } => match server {
            Some(base_url) => {
                run_trend(Arc::new(HttpLookup::new(base_url)), &hashtag, json).await
            }
            None => run_trend(Arc::new(DatasetLookup::builtin()), &hashtag, json).await,
        },
        Commands::Hashtags => {
            for key in TrendDataset::builtin().hashtags() {
                println!("#{}", key);
            }
            Ok(())
        }
    }
}

/// Drive the fetch client to a settled state and print the outcome.
async fn run_trend<L: TrendLookup + 'static>(
    lookup: Arc<L>,
    hashtag: &str,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let client = FetchClient::new(
        lookup,
        FetchConfig {
            dedupe_window: Duration::from_secs(config.fetch.dedupe_window_secs),
        },
    );
    let mut rx = client.subscribe(Some(hashtag));

    let series = loop {
        let state = rx.borrow().state.clone();
        match state {
            FetchState::Success(series) => break series,
            FetchState::Failure(message) => anyhow::bail!(message),
            _ => rx.changed().await?,
        }
    };

    let result = analyze(&series);

    if json {
        let payload = serde_json::json!({
            "series": series,
            "analytics": result,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let arrow = match result.direction {
        Direction::Up => "↑",
        Direction::Down => "↓",
        Direction::Neutral => "→",
    };

    println!("{} — {}", series.hashtag, series.range);
    println!("Trend: {} {}", arrow, result.badge_label());
    println!(
        "Lowest sentiment: {}   Highest sentiment: {}",
        result.min_label(),
        result.max_label()
    );
    println!();
    for point in &series.trend {
        println!("  {}  {:>6.2}", point.date, point.sentiment);
    }

    Ok(())
}
