use thiserror::Error;

use crate::pair::WordPairKey;

/// Main error type for wordsim
#[derive(Error, Debug)]
pub enum WordsimError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input data (bad field count, unparseable score, bad sense record)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A word with no entry in the taxonomy (entry point B is all-or-nothing)
    #[error("No senses found for {0}")]
    NoSenseFound(String),

    /// A results-file pair absent from the reference data (entry point A is all-or-nothing)
    #[error("Pair not in reference: {0}")]
    PairNotInReference(WordPairKey),
}

/// Convenient Result type using WordsimError
pub type Result<T> = std::result::Result<T, WordsimError>;
