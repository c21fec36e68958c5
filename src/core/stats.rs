//! core/stats.rs — Scalar summary statistics and Pearson correlation.

use crate::error::{AnalysisError, Result};

/// Arithmetic mean. Panics on empty input in debug builds; callers guard N.
pub fn mean(xs: &[f64]) -> f64 {
    debug_assert!(!xs.is_empty());
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Median via sort; average of the two middle values for even N.
pub fn median(xs: &[f64]) -> f64 {
    debug_assert!(!xs.is_empty());
    let mut sorted = xs.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        0.5 * (sorted[n / 2 - 1] + sorted[n / 2])
    }
}

/// Sample variance (ddof = 1).
pub fn variance(xs: &[f64]) -> f64 {
    debug_assert!(xs.len() >= 2);
    let m = mean(xs);
    xs.iter().map(|&v| (v - m) * (v - m)).sum::<f64>() / (xs.len() - 1) as f64
}

/// Pearson correlation coefficient of two equal-length sequences.
///
/// Errors: `InsufficientData` for N < 3 or a length mismatch,
/// `DegenerateInput` when either sequence has zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Result<f64> {
    check_paired(xs, ys)?;
    let mx = mean(xs);
    let my = mean(ys);

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx <= 0.0 {
        return Err(AnalysisError::DegenerateInput(
            "first sequence has zero variance".into(),
        ));
    }
    if syy <= 0.0 {
        return Err(AnalysisError::DegenerateInput(
            "second sequence has zero variance".into(),
        ));
    }

    // Clamp guards against rounding pushing |r| just past 1.
    let r = sxy / (sxx.sqrt() * syy.sqrt());
    Ok(r.clamp(-1.0, 1.0))
}

/// Shared paired-sequence validation for correlation and regression inputs.
pub fn check_paired(xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(AnalysisError::InvalidInput(format!(
            "paired sequences differ in length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < 3 {
        return Err(AnalysisError::InsufficientData {
            needed: 3,
            got: xs.len(),
        });
    }
    for &v in xs.iter().chain(ys) {
        if !v.is_finite() {
            return Err(AnalysisError::InvalidInput(
                "sequence contains NaN or Inf".into(),
            ));
        }
    }
    Ok(())
}

/// Two-sided tail probability of a Student-t statistic with `df` degrees of
/// freedom. Infinite |t| (a perfect correlation) maps to p = 0.
pub fn student_t_two_sided(t: f64, df: f64) -> f64 {
    use statrs::distribution::{ContinuousCDF, StudentsT};
    if !t.is_finite() {
        return 0.0;
    }
    // df >= 1 is guaranteed by the N >= 3 checks upstream.
    let dist = StudentsT::new(0.0, 1.0, df).expect("degrees of freedom must be positive");
    let p = 2.0 * (1.0 - dist.cdf(t.abs()));
    p.clamp(0.0, 1.0)
}
