//! core/ttest.rs — Welch two-sample t-test for the BCG vs field enhancement.
//!
//! Unequal variances are the norm here (the BCG fractions scatter far more
//! than the field ones), so the Welch form with Welch–Satterthwaite degrees
//! of freedom is used rather than the pooled-variance test.

use crate::core::stats::{mean, student_t_two_sided, variance};
use crate::error::{AnalysisError, Result};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct WelchTTest {
    pub t_statistic: f64,
    pub p_value: f64,
    /// Welch–Satterthwaite effective degrees of freedom.
    pub df: f64,
    pub n_a: usize,
    pub n_b: usize,
}

/// Two-sided Welch t-test of mean(a) vs mean(b).
pub fn welch_t_test(a: &[f64], b: &[f64]) -> Result<WelchTTest> {
    for (seq, label) in [(a, "first"), (b, "second")] {
        if seq.len() < 2 {
            return Err(AnalysisError::InsufficientData {
                needed: 2,
                got: seq.len(),
            });
        }
        if seq.iter().any(|v| !v.is_finite()) {
            return Err(AnalysisError::InvalidInput(format!(
                "{label} sample contains NaN or Inf"
            )));
        }
    }

    let (na, nb) = (a.len() as f64, b.len() as f64);
    let (va, vb) = (variance(a), variance(b));
    let sa = va / na;
    let sb = vb / nb;
    if sa + sb <= 0.0 {
        return Err(AnalysisError::DegenerateInput(
            "both samples have zero variance".into(),
        ));
    }

    let t = (mean(a) - mean(b)) / (sa + sb).sqrt();
    let df = (sa + sb) * (sa + sb) / (sa * sa / (na - 1.0) + sb * sb / (nb - 1.0));

    Ok(WelchTTest {
        t_statistic: t,
        p_value: student_t_two_sided(t, df),
        df,
        n_a: a.len(),
        n_b: b.len(),
    })
}
