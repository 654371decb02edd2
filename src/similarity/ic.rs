//! Information-content model: per-node informativeness statistics derived
//! from corpus frequencies, loaded once and shared read-only for the run.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, WordsimError};

/// Mapping from sense key to information-content value.
#[derive(Debug)]
pub struct InformationContent {
    values: HashMap<String, f64>,
}

impl InformationContent {
    /// Loads a 2-column TSV: `sense_key \t ic_value`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut values = HashMap::new();
        for (lineno, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != 2 {
                return Err(WordsimError::Parse(format!(
                    "{}:{}: expected 2 tab-separated fields, got {}",
                    path.display(),
                    lineno + 1,
                    fields.len()
                )));
            }
            let value: f64 = fields[1].trim().parse().map_err(|_| {
                WordsimError::Parse(format!(
                    "{}:{}: invalid information content {:?}",
                    path.display(),
                    lineno + 1,
                    fields[1]
                ))
            })?;
            values.insert(fields[0].to_string(), value);
        }
        Ok(InformationContent { values })
    }

    /// Builds a model from explicit entries (synthetic models for tests).
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        InformationContent {
            values: entries.into_iter().collect(),
        }
    }

    /// Information content of a sense key, if the corpus statistics cover it.
    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_parses_keys_and_values() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "dog.n.01\t8.0\ncat.n.01\t7.5\n").unwrap();
        file.flush().unwrap();
        let ic = InformationContent::load(file.path()).unwrap();
        assert_eq!(ic.len(), 2);
        assert!((ic.value("dog.n.01").unwrap() - 8.0).abs() < 1e-9);
        assert_eq!(ic.value("unknown.n.01"), None);
    }

    #[test]
    fn load_rejects_bad_value() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "dog.n.01\thigh\n").unwrap();
        file.flush().unwrap();
        let err = InformationContent::load(file.path()).unwrap_err();
        assert!(matches!(err, WordsimError::Parse(_)));
    }
}
