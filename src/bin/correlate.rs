//! Plain-results pipeline: correlate a computed-score TSV against the human
//! reference TSV and report Spearman correlation plus coverage.

use clap::Parser;
use log::info;
use std::path::PathBuf;
use wordsim::{
    dataset::{self, ReferenceData},
    eval::{spearman, EvaluationResult},
};

/// Computes correlation and coverage for precomputed similarity scores.
#[derive(Parser, Debug)]
#[command(name = "correlate")]
struct Args {
    /// Path to the reference TSV (word1 \t word2 \t human score).
    #[arg(long)]
    reference: PathBuf,

    /// Path to the results TSV (word1 \t word2 \t computed score).
    #[arg(long)]
    results: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let reference = ReferenceData::load(&args.reference)?;
    if reference.is_empty() {
        anyhow::bail!("No reference pairs in {}", args.reference.display());
    }
    let rows = dataset::load_rows(&args.results)?;

    // Every results pair must be present in the reference; a miss aborts the
    // whole run since it means the files are out of alignment.
    let (human, computed) = dataset::join_results(&reference, &rows)?;

    let result = EvaluationResult {
        correlation: spearman(&human, &computed),
        // Coverage here is over the intended population: how many of the
        // distinct reference pairs the results feed actually scored.
        coverage: rows.len() as f64 / reference.len() as f64,
    };
    info!("Cor:\t{}", result);
    Ok(())
}
