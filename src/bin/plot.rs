//! goldbach chart viewer
//!
//! Run with: `cargo run --features gui --bin goldbach-plot -- gaps --max 10000`

use clap::{Parser, Subcommand};
use goldbach::config::Config;
use goldbach::gui::{plot_goldbach_combinations, plot_prime_gaps};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "goldbach-plot")]
#[command(version)]
#[command(about = "Chart Goldbach pair counts and prime gaps")]
struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    chart: Chart,
}

#[derive(Subcommand)]
enum Chart {
    /// Number of prime pairs for every even number up to a limit
    Combinations {
        /// Largest even number (defaults to plot.goldbach_max)
        #[arg(short, long)]
        max: Option<i64>,
    },

    /// Primes up to a limit against their gap to the previous prime
    Gaps {
        /// Upper bound (defaults to plot.gaps_max)
        #[arg(short, long)]
        max: Option<i64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => Config::from_file(path)?,
        None => load_config(),
    };

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.log_level.as_str()),
    )
    .init();

    match cli.chart {
        Chart::Combinations { max } => {
            let max = max.unwrap_or(config.plot.goldbach_max);
            log::info!("Plotting pair counts up to {}", max);
            plot_goldbach_combinations(max, &config.plot)?;
        }
        Chart::Gaps { max } => {
            let max = max.unwrap_or(config.plot.gaps_max);
            log::info!("Plotting prime gaps up to {}", max);
            plot_prime_gaps(max, &config.plot)?;
        }
    }

    Ok(())
}

/// Load configuration from file or use default
fn load_config() -> Config {
    // Try to load from common locations
    let paths = ["goldbach.yaml", "config.yaml", "../goldbach.yaml"];

    for path in paths {
        if let Ok(config) = Config::from_file(path) {
            return config;
        }
    }

    Config::default()
}
