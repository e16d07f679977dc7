//! goldbach - CLI Entry Point
//!
//! Interactive menu and one-shot reports for Goldbach's conjecture.

use clap::{Parser, Subcommand};
use goldbach::menu::{Menu, MenuOutcome};
use goldbach::report::{self, OutputFormat};
use goldbach::{find_counterexample, prime_gaps, range_counts, Config, EvenTarget};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "goldbach")]
#[command(version)]
#[command(about = "Explore Goldbach's conjecture: prime pairs, prime gaps and their counts")]
struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true, default_value = "goldbach.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default when no command is given)
    Menu,

    /// List the prime pairs that sum to an even number
    Pairs {
        /// Even number greater than 2
        #[arg(allow_negative_numbers = true)]
        n: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Count prime pairs for every even number up to a limit
    Range {
        /// Largest even number to evaluate
        #[arg(allow_negative_numbers = true)]
        max: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List primes up to a limit with the gap to the previous prime
    Gaps {
        /// Upper bound (inclusive)
        max: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check the conjecture for every even number up to a limit
    Verify {
        /// Largest even number to check
        #[arg(allow_negative_numbers = true)]
        max: i64,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "goldbach.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load_or_default(&cli.config)?;

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.log_level.as_str()),
    )
    .init();
    log::debug!("Config path: {}", cli.config.display());

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => run_menu(&config),

        Commands::Pairs { n, format } => show_pairs(n, format),

        Commands::Range { max, format } => show_range(max, format, &config),

        Commands::Gaps { max, format } => show_gaps(max, format),

        Commands::Verify { max } => verify_range(max),

        Commands::Init { output } => generate_config(output),
    }
}

fn run_menu(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut menu = Menu::new(stdin.lock(), stdout.lock()).with_bar_char(config.report.bar_char);
    let outcome = menu.run()?;
    match outcome {
        MenuOutcome::InvalidChoice => log::debug!("Menu ended without a report"),
        _ => log::info!("Menu finished: {:?}", outcome),
    }
    Ok(())
}

fn show_pairs(n: i64, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let target = EvenTarget::new(n)?;
    let mut out = io::stdout().lock();
    report::write_pairs(&mut out, target, format)?;
    out.flush()?;
    Ok(())
}

fn show_range(
    max: i64,
    format: OutputFormat,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let max = EvenTarget::new(max)?;

    let start = Instant::now();
    let entries = range_counts(max.get());
    log::info!(
        "Counted pairs for {} even numbers in {:.3}s",
        entries.len(),
        start.elapsed().as_secs_f64()
    );

    let mut out = io::stdout().lock();
    report::write_range(&mut out, &entries, format, config.report.bar_char)?;
    out.flush()?;
    Ok(())
}

fn show_gaps(max: i64, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let gaps = prime_gaps(max);
    log::info!(
        "Found {} primes up to {} in {:.3}s",
        gaps.len(),
        max,
        start.elapsed().as_secs_f64()
    );

    let mut out = io::stdout().lock();
    report::write_gaps(&mut out, max, &gaps, format)?;
    out.flush()?;
    Ok(())
}

fn verify_range(max: i64) -> Result<(), Box<dyn std::error::Error>> {
    let max = EvenTarget::new(max)?;

    println!("=== Goldbach Verification ===");
    println!("Range: 4..={}", max);

    let start = Instant::now();
    let counterexample = find_counterexample(max.get());
    let elapsed = start.elapsed();

    match counterexample {
        Some(n) => println!("No prime pair found for {}", n),
        None => println!("Every even number from 4 to {} is a sum of two primes", max),
    }
    println!("Time: {:.3}s", elapsed.as_secs_f64());

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}
