//! core/spearman.rs — Spearman rank correlation with leave-one-out
//! sensitivity.
//!
//! rho is the Pearson correlation of the mid-rank transforms. The two-sided
//! p-value uses the Student-t approximation `t = rho*sqrt((N-2)/(1-rho^2))`
//! with N-2 degrees of freedom. For N < 10 the approximation is coarse; the
//! result carries an `approximate` flag so reports can say so. An exact
//! permutation test was considered and rejected to keep the run deterministic
//! and dependency-light at these sample sizes.

use crate::core::rank::midranks;
use crate::core::stats::{check_paired, pearson, student_t_two_sided};
use crate::error::Result;
use serde::Serialize;

/// Minimum sample size below which the t approximation is flagged as coarse.
const T_APPROX_RELIABLE_N: usize = 10;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct SpearmanResult {
    pub rho: f64,
    pub p_value: f64,
    pub n: usize,
    /// True when N is too small for the t-based p-value to be trusted.
    pub approximate: bool,
}

/// Spearman rank correlation of two paired sequences.
pub fn spearman(xs: &[f64], ys: &[f64]) -> Result<SpearmanResult> {
    check_paired(xs, ys)?;
    let rx = midranks(xs);
    let ry = midranks(ys);
    let rho = pearson(&rx, &ry)?;

    let n = xs.len();
    let df = (n - 2) as f64;
    let denom = 1.0 - rho * rho;
    let t = if denom <= 0.0 {
        // |rho| == 1: the statistic diverges and the tail probability is 0.
        f64::INFINITY * rho.signum()
    } else {
        rho * (df / denom).sqrt()
    };

    Ok(SpearmanResult {
        rho,
        p_value: student_t_two_sided(t, df),
        n,
        approximate: n < T_APPROX_RELIABLE_N,
    })
}

/// Recompute with one paired observation removed. Inputs are never mutated.
pub fn spearman_excluding(xs: &[f64], ys: &[f64], exclude: usize) -> Result<SpearmanResult> {
    let (xr, yr) = drop_index(xs, ys, exclude);
    spearman(&xr, &yr)
}

/// One row of a full leave-one-out scan.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct InfluencePoint {
    pub index: usize,
    pub result: SpearmanResult,
    /// rho(without this point) - rho(full sample).
    pub delta_rho: f64,
}

/// Leave-one-out scan over every index; returns the scan plus the index whose
/// removal moves rho the most.
pub fn most_influential(xs: &[f64], ys: &[f64]) -> Result<(Vec<InfluencePoint>, usize)> {
    let full = spearman(xs, ys)?;
    let mut scan = Vec::with_capacity(xs.len());
    for i in 0..xs.len() {
        let result = spearman_excluding(xs, ys, i)?;
        scan.push(InfluencePoint {
            index: i,
            result,
            delta_rho: result.rho - full.rho,
        });
    }
    let top = scan
        .iter()
        .max_by(|a, b| {
            a.delta_rho
                .abs()
                .partial_cmp(&b.delta_rho.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|p| p.index)
        .unwrap_or(0);
    Ok((scan, top))
}

pub(crate) fn drop_index(xs: &[f64], ys: &[f64], exclude: usize) -> (Vec<f64>, Vec<f64>) {
    let keep = |(&v, i): (&f64, usize)| if i == exclude { None } else { Some(v) };
    let xr: Vec<f64> = xs.iter().zip(0..).filter_map(keep).collect();
    let yr: Vec<f64> = ys.iter().zip(0..).filter_map(keep).collect();
    (xr, yr)
}
