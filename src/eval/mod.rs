//! Correlation and coverage evaluation.

pub mod metrics;

pub use metrics::{evaluate, spearman, EvaluationResult};
