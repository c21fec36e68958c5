//! core/powerlaw.rs — Power-law fit y = a * x^b via OLS in log10-log10 space.

use crate::core::spearman::drop_index;
use crate::core::stats::{check_paired, mean, student_t_two_sided};
use crate::error::{AnalysisError, Result};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct PowerLawFit {
    /// Exponent b, the slope in log-log space.
    pub slope: f64,
    /// log10 of the amplitude a.
    pub intercept: f64,
    /// Amplitude a = 10^intercept.
    pub amplitude: f64,
    /// Coefficient of determination on the log-log residuals.
    pub r_squared: f64,
    /// Standard error of the slope.
    pub std_err: f64,
    /// Two-sided p-value of the slope against b = 0.
    pub p_value: f64,
    pub n: usize,
    /// Set when the fit ran in leave-one-out mode.
    pub excluded: Option<usize>,
}

impl PowerLawFit {
    /// Predicted y at a given x under the fitted relation.
    pub fn predict(&self, x: f64) -> f64 {
        self.amplitude * x.powf(self.slope)
    }
}

/// Fit a power law to paired positive sequences.
///
/// Errors: `InvalidInput` if any value <= 0 (log undefined),
/// `InsufficientData` for N < 3, `DegenerateInput` if x has zero variance.
pub fn fit(xs: &[f64], ys: &[f64]) -> Result<PowerLawFit> {
    check_paired(xs, ys)?;
    for (seq, label) in [(xs, "x"), (ys, "y")] {
        if let Some(&bad) = seq.iter().find(|&&v| v <= 0.0) {
            return Err(AnalysisError::InvalidInput(format!(
                "power-law fit requires positive {label} values, got {bad:e}"
            )));
        }
    }

    let lx: Vec<f64> = xs.iter().map(|v| v.log10()).collect();
    let ly: Vec<f64> = ys.iter().map(|v| v.log10()).collect();

    let n = lx.len();
    let mx = mean(&lx);
    let my = mean(&ly);

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (&x, &y) in lx.iter().zip(&ly) {
        let dx = x - mx;
        let dy = y - my;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }
    if sxx <= 0.0 {
        return Err(AnalysisError::DegenerateInput(
            "x sequence has zero variance in log space".into(),
        ));
    }

    let slope = sxy / sxx;
    let intercept = my - slope * mx;

    // Residual sum of squares in log space; syy == 0 means y is constant and
    // the flat fit is exact, so R^2 = 1 by convention.
    let ss_res = (syy - slope * sxy).max(0.0);
    let r_squared = if syy <= 0.0 { 1.0 } else { 1.0 - ss_res / syy };

    let df = (n - 2) as f64;
    let (std_err, p_value) = if ss_res <= 0.0 {
        (0.0, 0.0)
    } else {
        let se = (ss_res / df / sxx).sqrt();
        (se, student_t_two_sided(slope / se, df))
    };

    Ok(PowerLawFit {
        slope,
        intercept,
        amplitude: 10f64.powf(intercept),
        r_squared,
        std_err,
        p_value,
        n,
        excluded: None,
    })
}

/// Refit with one paired observation removed, to quantify its leverage.
/// Inputs are never mutated.
pub fn fit_excluding(xs: &[f64], ys: &[f64], exclude: usize) -> Result<PowerLawFit> {
    let (xr, yr) = drop_index(xs, ys, exclude);
    let mut result = fit(&xr, &yr)?;
    result.excluded = Some(exclude);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_exact_power_law() {
        // y = 3 x^2 sampled at four positive points.
        let x = [1.0, 2.0, 4.0, 10.0];
        let y: Vec<f64> = x.iter().map(|&v| 3.0 * v * v).collect();
        let f = fit(&x, &y).unwrap();
        assert!((f.slope - 2.0).abs() < 1e-9);
        assert!((f.amplitude - 3.0).abs() < 1e-9);
        assert!((f.r_squared - 1.0).abs() < 1e-12);
        assert!(f.std_err.abs() < 1e-9);
        assert!((f.predict(5.0) - 75.0).abs() < 1e-6);
    }

    #[test]
    fn identity_relation_has_unit_slope() {
        let x = [1.0, 2.0, 3.0];
        let y = [1.0, 2.0, 3.0];
        let f = fit(&x, &y).unwrap();
        assert!((f.slope - 1.0).abs() < 1e-9);
        assert!((f.r_squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_values() {
        let err = fit(&[1.0, 2.0, 3.0], &[1.0, -2.0, 3.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
        let err = fit(&[0.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn rejects_constant_x() {
        let err = fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateInput(_)));
    }

    #[test]
    fn leverage_of_a_planted_outlier_is_reversible() {
        // Clean slope-1 relation plus one extreme high-mass outlier.
        let x = [1.0, 2.0, 4.0, 8.0, 1000.0];
        let y = [1.0, 2.0, 4.0, 8.0, 1.0e6];
        let with = fit(&x, &y).unwrap();
        let without = fit_excluding(&x, &y, 4).unwrap();
        assert_eq!(without.excluded, Some(4));
        assert_eq!(without.n, 4);
        assert!((without.slope - 1.0).abs() < 1e-9);
        assert!(with.slope > without.slope + 0.1);
        // Re-running the full fit restores the original slope exactly.
        let again = fit(&x, &y).unwrap();
        assert_eq!(with.slope.to_bits(), again.slope.to_bits());
    }

    #[test]
    fn noisy_fit_reports_uncertainty() {
        let x = [1.0, 2.0, 4.0, 8.0, 16.0];
        let y = [1.1, 1.9, 4.3, 7.6, 17.0];
        let f = fit(&x, &y).unwrap();
        assert!(f.r_squared > 0.97 && f.r_squared < 1.0);
        assert!(f.std_err > 0.0);
        assert!(f.p_value > 0.0 && f.p_value < 0.01);
    }
}
