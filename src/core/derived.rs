//! core/derived.rs — Per-galaxy derived quantities.
//!
//! The field baseline is an explicit parameter everywhere, so recomputing
//! against a different comparison sample is side-effect-free.

use crate::catalog::{Category, GalaxyRecord};
use crate::error::{AnalysisError, Result};
use crate::core::stats::mean;
use serde::Serialize;

/// A galaxy record plus its derived quantities.
#[derive(Clone, Debug, Serialize)]
pub struct DerivedRecord {
    pub record: GalaxyRecord,
    /// M_BH / M_star.
    pub mass_fraction: f64,
    /// Propagated 1-sigma error on the fraction:
    /// f * sqrt((s_bh/m_bh)^2 + (s_star/m_star)^2).
    pub fraction_err: f64,
    /// mass_fraction / field baseline fraction.
    pub overmass_factor: f64,
}

/// Arithmetic mean of M_BH/M_star over the Field records.
///
/// `InvalidInput` if the field subset is empty or any mass is non-positive.
pub fn field_baseline(records: &[GalaxyRecord]) -> Result<f64> {
    let mut fractions = Vec::new();
    for r in records.iter().filter(|r| r.category == Category::Field) {
        r.validate()?;
        fractions.push(r.m_bh / r.m_star);
    }
    if fractions.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "field subset is empty; overmass baseline is undefined".into(),
        ));
    }
    Ok(mean(&fractions))
}

/// Compute derived quantities for every record against the given baseline.
/// Field records go through the same path; their overmass factors average
/// to ~1 when the baseline came from the same sample.
pub fn derive_all(records: &[GalaxyRecord], baseline: f64) -> Result<Vec<DerivedRecord>> {
    if !(baseline > 0.0) || !baseline.is_finite() {
        return Err(AnalysisError::InvalidInput(format!(
            "field baseline fraction must be positive and finite, got {baseline:e}"
        )));
    }
    records
        .iter()
        .map(|r| {
            r.validate()?;
            let fraction = r.m_bh / r.m_star;
            let rel_bh = r.m_bh_err / r.m_bh;
            let rel_star = r.m_star_err / r.m_star;
            Ok(DerivedRecord {
                record: r.clone(),
                mass_fraction: fraction,
                fraction_err: fraction * (rel_bh * rel_bh + rel_star * rel_star).sqrt(),
                overmass_factor: fraction / baseline,
            })
        })
        .collect()
}
