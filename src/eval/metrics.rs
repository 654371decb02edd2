//! Spearman rank correlation and coverage over score columns with missing
//! entries.

use std::fmt;

/// Outcome of evaluating one computed-score column against the reference.
///
/// `correlation` is `None` when fewer than 2 jointly-defined pairs remain or
/// a rank column has no variance. `coverage` is always in [0, 1] here; the
/// plain-results pipeline computes its coverage against a different
/// denominator (distinct reference pairs) and builds this struct directly.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationResult {
    pub correlation: Option<f64>,
    pub coverage: f64,
}

impl fmt::Display for EvaluationResult {
    /// Matches the report line shape `" 0.6931 (coverage: 0.40)"`, with a
    /// leading space holding the place of a minus sign and `nan` for an
    /// undefined correlation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.correlation {
            Some(rho) if rho < 0.0 => write!(f, "{:.4}", rho)?,
            Some(rho) => write!(f, " {:.4}", rho)?,
            None => write!(f, " nan")?,
        }
        write!(f, " (coverage: {:.2})", self.coverage)
    }
}

/// Evaluates a computed column against the index-aligned reference column.
///
/// Positions where the computed value is undefined are excluded from the
/// correlation (both columns) but still count in the coverage denominator.
pub fn evaluate(reference: &[f64], computed: &[Option<f64>]) -> EvaluationResult {
    debug_assert_eq!(reference.len(), computed.len());
    let mut x = Vec::with_capacity(reference.len());
    let mut y = Vec::with_capacity(computed.len());
    for (r, c) in reference.iter().zip(computed.iter()) {
        if let Some(value) = c {
            x.push(*r);
            y.push(*value);
        }
    }
    let coverage = if computed.is_empty() {
        0.0
    } else {
        y.len() as f64 / computed.len() as f64
    };
    EvaluationResult {
        correlation: spearman(&x, &y),
        coverage,
    }
}

/// Spearman rank correlation: Pearson correlation of the two rank columns,
/// with tied values sharing their average rank. `None` for fewer than 2
/// pairs or a constant column (undefined, not an error).
pub fn spearman(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let n = x.len();
    let rank_x = ranks(x);
    let rank_y = ranks(y);

    let mean_x: f64 = rank_x.iter().sum::<f64>() / n as f64;
    let mean_y: f64 = rank_y.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = rank_x[i] - mean_x;
        let dy = rank_y[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x < 1e-12 || var_y < 1e-12 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// 1-based ranks, ties replaced by the average rank of their run.
fn ranks(values: &[f64]) -> Vec<f64> {
    let mut indexed: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < indexed.len() {
        let mut j = i;
        while j + 1 < indexed.len() && indexed[j + 1].1 == indexed[i].1 {
            j += 1;
        }
        // Positions i..=j hold equal values; all get the mean of ranks i+1..=j+1.
        let average = (i + j) as f64 / 2.0 + 1.0;
        for item in indexed.iter().take(j + 1).skip(i) {
            ranks[item.0] = average;
        }
        i = j + 1;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_correlation_is_one() {
        let x = vec![0.1, 0.5, 0.3, 0.9];
        let rho = spearman(&x, &x).unwrap();
        assert!((rho - 1.0).abs() < 1e-9);
    }

    #[test]
    fn reversed_correlation_is_minus_one() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let y = vec![4.0, 3.0, 2.0, 1.0];
        let rho = spearman(&x, &y).unwrap();
        assert!((rho + 1.0).abs() < 1e-9);
    }

    #[test]
    fn monotone_nonlinear_is_one() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let y = vec![1.0, 4.0, 9.0, 16.0];
        let rho = spearman(&x, &y).unwrap();
        assert!((rho - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ties_get_average_ranks() {
        // ranks(x) = [1, 2.5, 2.5, 4]; rho = 3 / sqrt(10)
        let x = vec![1.0, 2.0, 2.0, 3.0];
        let y = vec![1.0, 2.0, 3.0, 4.0];
        let rho = spearman(&x, &y).unwrap();
        assert!((rho - 3.0 / 10.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn fewer_than_two_pairs_is_undefined() {
        assert_eq!(spearman(&[], &[]), None);
        assert_eq!(spearman(&[1.0], &[2.0]), None);
    }

    #[test]
    fn constant_column_is_undefined() {
        let x = vec![1.0, 2.0, 3.0];
        let y = vec![5.0, 5.0, 5.0];
        assert_eq!(spearman(&x, &y), None);
    }

    #[test]
    fn evaluate_full_coverage() {
        let reference = vec![0.8, 0.6];
        let computed = vec![Some(0.9), Some(0.5)];
        let result = evaluate(&reference, &computed);
        assert!((result.coverage - 1.0).abs() < 1e-9);
        assert!((result.correlation.unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn evaluate_skips_undefined_but_counts_them_in_coverage() {
        // 10 pairs, 4 defined: coverage 0.4, correlation over exactly those 4.
        let reference = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let mut computed = vec![None; 10];
        computed[1] = Some(2.0);
        computed[3] = Some(4.0);
        computed[5] = Some(6.0);
        computed[8] = Some(9.0);
        let result = evaluate(&reference, &computed);
        assert!((result.coverage - 0.4).abs() < 1e-9);
        assert!((result.correlation.unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn exclusion_preserves_relative_ranks() {
        // Dropping the undefined middle entries must not disturb the order
        // of the surviving ones.
        let reference = vec![3.0, 1.0, 2.0, 4.0];
        let computed = vec![Some(0.3), None, None, Some(0.4)];
        let result = evaluate(&reference, &computed);
        assert!((result.correlation.unwrap() - 1.0).abs() < 1e-9);
        assert!((result.coverage - 0.5).abs() < 1e-9);
    }

    #[test]
    fn evaluate_too_few_defined_is_soft() {
        let reference = vec![1.0, 2.0, 3.0];
        let computed = vec![Some(0.5), None, None];
        let result = evaluate(&reference, &computed);
        assert_eq!(result.correlation, None);
        assert!((result.coverage - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn coverage_stays_in_unit_interval() {
        let reference = vec![1.0, 2.0];
        for computed in [
            vec![None, None],
            vec![Some(1.0), None],
            vec![Some(1.0), Some(2.0)],
        ] {
            let result = evaluate(&reference, &computed);
            assert!((0.0..=1.0).contains(&result.coverage));
        }
    }

    #[test]
    fn display_formats_sign_and_nan() {
        let positive = EvaluationResult {
            correlation: Some(0.6931),
            coverage: 0.4,
        };
        assert_eq!(positive.to_string(), " 0.6931 (coverage: 0.40)");
        let negative = EvaluationResult {
            correlation: Some(-1.0),
            coverage: 1.0,
        };
        assert_eq!(negative.to_string(), "-1.0000 (coverage: 1.00)");
        let undefined = EvaluationResult {
            correlation: None,
            coverage: 0.0,
        };
        assert_eq!(undefined.to_string(), " nan (coverage: 0.00)");
    }
}
