//! TSV loaders for the human reference data and the computed results feed.
//!
//! Both files share the same 3-column shape: `word1 \t word2 \t score`.
//! The reference file becomes a map keyed by normalized pair; the results
//! file stays an ordered list because row order carries the pairing with
//! whatever reference score each row looks up.

use std::collections::HashMap;
use std::path::Path;

use log::warn;

use crate::error::{Result, WordsimError};
use crate::pair::WordPairKey;

/// One ordered row of a 3-column TSV file. No dedup: the same pair may
/// appear on several rows.
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub word1: String,
    pub word2: String,
    pub score: f64,
}

/// Reads a 3-column TSV into ordered rows.
pub fn load_rows(path: &Path) -> Result<Vec<ResultRow>> {
    let content = std::fs::read_to_string(path)?;
    let mut rows = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            return Err(WordsimError::Parse(format!(
                "{}:{}: expected 3 tab-separated fields, got {}",
                path.display(),
                lineno + 1,
                fields.len()
            )));
        }
        let score: f64 = fields[2].trim().parse().map_err(|_| {
            WordsimError::Parse(format!(
                "{}:{}: invalid score {:?}",
                path.display(),
                lineno + 1,
                fields[2]
            ))
        })?;
        rows.push(ResultRow {
            word1: fields[0].to_string(),
            word2: fields[1].to_string(),
            score,
        });
    }
    Ok(rows)
}

/// Human similarity judgments, keyed by normalized word pair.
/// Read-only after construction.
#[derive(Debug)]
pub struct ReferenceData {
    scores: HashMap<WordPairKey, f64>,
}

impl ReferenceData {
    /// Loads the reference TSV. A pair appearing more than once keeps the
    /// last score seen (the file acts as a dictionary keyed by pair); the
    /// overwrite is logged since it usually signals a dirty reference file.
    pub fn load(path: &Path) -> Result<Self> {
        let rows = load_rows(path)?;
        Ok(Self::from_rows(rows))
    }

    fn from_rows(rows: Vec<ResultRow>) -> Self {
        let mut scores = HashMap::with_capacity(rows.len());
        for row in rows {
            let key = WordPairKey::new(&row.word1, &row.word2);
            if let Some(old) = scores.insert(key.clone(), row.score) {
                warn!(
                    "duplicate reference pair {}: {} overwrites {}",
                    key, row.score, old
                );
            }
        }
        ReferenceData { scores }
    }

    /// Human score for a normalized pair, if present.
    pub fn score(&self, key: &WordPairKey) -> Option<f64> {
        self.scores.get(key).copied()
    }

    /// Number of distinct reference pairs.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Joins a results feed against the reference data, in input order.
///
/// Returns the two index-aligned score columns (human, computed). A results
/// pair with no reference entry is a hard `PairNotInReference` error: the
/// run is all-or-nothing, since an unmatched pair means the two files are
/// not about the same dataset.
pub fn join_results(
    reference: &ReferenceData,
    rows: &[ResultRow],
) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut human = Vec::with_capacity(rows.len());
    let mut computed = Vec::with_capacity(rows.len());
    for row in rows {
        let key = WordPairKey::new(&row.word1, &row.word2);
        let score = reference
            .score(&key)
            .ok_or(WordsimError::PairNotInReference(key))?;
        human.push(score);
        computed.push(row.score);
    }
    Ok((human, computed))
}
