//! Taxonomy-metrics pipeline: resolve every reference pair to senses, run
//! the six-metric similarity battery, and report one correlation/coverage
//! line per metric.

use clap::Parser;
use log::info;
use std::path::PathBuf;
use wordsim::{
    dataset,
    eval::evaluate,
    similarity::{InformationContent, Metric, SimilarityEngine, SimilarityRow},
    taxonomy::{SenseResolver, TaxonomyStore},
    Config,
};

/// Computes correlations for taxonomy-based similarity metrics.
#[derive(Parser, Debug)]
#[command(name = "taxsim")]
struct Args {
    /// Path to the reference TSV (word1 \t word2 \t human score).
    #[arg(long)]
    reference: PathBuf,

    /// Path to the taxonomy TSV (default from wordsim.toml).
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    /// Path to the information-content TSV (default from wordsim.toml).
    #[arg(long)]
    ic: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::load()?;
    let taxonomy_path = args.taxonomy.unwrap_or(config.data.taxonomy_path);
    let ic_path = args.ic.unwrap_or(config.data.ic_path);

    let store = TaxonomyStore::load(&taxonomy_path)?;
    let ic = InformationContent::load(&ic_path)?;
    let rows = dataset::load_rows(&args.reference)?;
    if rows.is_empty() {
        anyhow::bail!("No reference pairs in {}", args.reference.display());
    }

    // Resolve every pair up front; one unknown word fails the whole run.
    // Each word resolves once per row and the handle is reused for the whole
    // battery on that pair.
    let resolver = SenseResolver::new(&store);
    let mut pairs = Vec::with_capacity(rows.len());
    for row in &rows {
        let s1 = resolver.resolve(&caseless::default_case_fold_str(&row.word1), None)?;
        let s2 = resolver.resolve(&caseless::default_case_fold_str(&row.word2), None)?;
        pairs.push((s1, s2, row.score));
    }

    let engine = SimilarityEngine::new(&store, ic);
    let table: Vec<SimilarityRow> = pairs
        .iter()
        .map(|&(s1, s2, score)| engine.battery(score, s1, s2))
        .collect();

    let reference: Vec<f64> = table.iter().map(|row| row.reference).collect();
    for metric in Metric::ALL {
        let column: Vec<Option<f64>> = table.iter().map(|row| row.get(metric)).collect();
        let result = evaluate(&reference, &column);
        info!("{}:\t{}", metric.name(), result);
    }
    Ok(())
}
