//! Report rendering for the CLI subcommands.
//!
//! Each report can be written as plain text, CSV or JSON to any sink.

use crate::error::Result;
use crate::goldbach::{EvenTarget, PrimePair, RangeEntry};
use crate::primes::{GapSummary, PrimeGaps};
use serde::Serialize;
use std::io::Write;

/// Output format for reports
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

#[derive(Serialize)]
struct PairsReport<'a> {
    n: i64,
    total: usize,
    pairs: &'a [PrimePair],
}

#[derive(Serialize)]
struct GapsReport<'a> {
    max_n: i64,
    summary: &'a GapSummary,
    primes: &'a [i64],
    gaps: &'a [i64],
}

/// Write every prime pair of `target` and the total
pub fn write_pairs<W: Write>(out: &mut W, target: EvenTarget, format: OutputFormat) -> Result<()> {
    let pairs: Vec<PrimePair> = target.pairs().collect();

    match format {
        OutputFormat::Text => {
            writeln!(out, "Prime pairs that sum to {}:", target)?;
            for pair in &pairs {
                writeln!(out, "{}", pair)?;
            }
            writeln!(out, "Total combinations: {}", pairs.len())?;
        }
        OutputFormat::Csv => {
            writeln!(out, "low,high,sum")?;
            for pair in &pairs {
                writeln!(out, "{},{},{}", pair.low, pair.high, pair.sum())?;
            }
        }
        OutputFormat::Json => {
            let report = PairsReport {
                n: target.get(),
                total: pairs.len(),
                pairs: &pairs,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write pair counts for a range; text output includes a bar per entry
pub fn write_range<W: Write>(
    out: &mut W,
    entries: &[RangeEntry],
    format: OutputFormat,
    bar_char: char,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in entries {
                writeln!(out, "Number of combinations for {}: {}", entry.n, entry.count)?;
                writeln!(out, "{}", entry.bar(bar_char))?;
            }
        }
        OutputFormat::Csv => {
            writeln!(out, "n,count")?;
            for entry in entries {
                writeln!(out, "{},{}", entry.n, entry.count)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write primes with their gaps; text output ends with a summary line
pub fn write_gaps<W: Write>(
    out: &mut W,
    max_n: i64,
    gaps: &PrimeGaps,
    format: OutputFormat,
) -> Result<()> {
    let summary = gaps.summary();

    match format {
        OutputFormat::Text => {
            for (prime, gap) in gaps.iter() {
                writeln!(out, "{:>8} | gap {}", prime, gap)?;
            }
            writeln!(out, "{}", summary.summary_line())?;
        }
        OutputFormat::Csv => {
            writeln!(out, "prime,gap")?;
            for (prime, gap) in gaps.iter() {
                writeln!(out, "{},{}", prime, gap)?;
            }
        }
        OutputFormat::Json => {
            let report = GapsReport {
                max_n,
                summary: &summary,
                primes: &gaps.primes,
                gaps: &gaps.gaps,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
