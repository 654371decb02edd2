pub mod config;
pub mod dataset;
pub mod error;
pub mod eval;
pub mod pair;
pub mod similarity;
pub mod taxonomy;

pub use config::Config;
pub use error::{Result, WordsimError};
pub use pair::WordPairKey;
