//! catalog.rs — Literature samples of BCGs and field galaxies.
//!
//! Two immutable hand-curated tables. Masses are in solar masses; errors are
//! approximate 1-sigma values (roughly 0.2 dex where the source gives none).

use crate::error::{AnalysisError, Result};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Category {
    /// Brightest cluster galaxy, central galaxy of a cluster.
    Bcg,
    /// Isolated or group galaxy used for the comparison baseline.
    Field,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Bcg => write!(f, "BCG"),
            Category::Field => write!(f, "Field"),
        }
    }
}

/// One galaxy row. `m_host` is the cluster mass for BCGs and the halo mass
/// for field galaxies. Black hole mass may exceed no bound relative to the
/// stellar mass; overmassive cases are the point of the study.
#[derive(Clone, Debug, Serialize)]
pub struct GalaxyRecord {
    pub name: &'static str,
    pub m_bh: f64,
    pub m_bh_err: f64,
    pub m_star: f64,
    pub m_star_err: f64,
    pub m_host: f64,
    pub category: Category,
}

impl GalaxyRecord {
    const fn new(
        name: &'static str,
        m_bh: f64,
        m_bh_err: f64,
        m_star: f64,
        m_star_err: f64,
        m_host: f64,
        category: Category,
    ) -> Self {
        Self {
            name,
            m_bh,
            m_bh_err,
            m_star,
            m_star_err,
            m_host,
            category,
        }
    }

    /// All masses must be strictly positive; errors must be non-negative.
    pub fn validate(&self) -> Result<()> {
        for (label, v) in [
            ("M_BH", self.m_bh),
            ("M_star", self.m_star),
            ("M_host", self.m_host),
        ] {
            if !(v > 0.0) || !v.is_finite() {
                return Err(AnalysisError::InvalidInput(format!(
                    "{}: {} must be positive and finite, got {v:e}",
                    self.name, label
                )));
            }
        }
        for (label, v) in [("M_BH_err", self.m_bh_err), ("M_star_err", self.m_star_err)] {
            if !(v >= 0.0) || !v.is_finite() {
                return Err(AnalysisError::InvalidInput(format!(
                    "{}: {} must be non-negative and finite, got {v:e}",
                    self.name, label
                )));
            }
        }
        Ok(())
    }
}

/// The 14 BCGs of the expanded sample.
pub fn bcg_sample() -> Vec<GalaxyRecord> {
    use Category::Bcg;
    vec![
        GalaxyRecord::new("Phoenix A", 1.00e11, 0.5e11, 2.50e12, 0.5e12, 2.40e15, Bcg),
        GalaxyRecord::new("NGC 4889", 2.10e10, 0.8e10, 1.00e12, 0.3e12, 1.20e15, Bcg),
        GalaxyRecord::new("NGC 3842", 9.70e9, 3.0e9, 3.50e11, 0.7e11, 1.80e15, Bcg),
        GalaxyRecord::new("M87", 6.50e9, 0.7e9, 6.00e11, 1.0e11, 6.40e14, Bcg),
        GalaxyRecord::new("Cygnus A", 2.50e9, 0.7e9, 4.00e11, 0.8e11, 5.00e14, Bcg),
        GalaxyRecord::new("NGC 1399", 8.80e8, 3.0e8, 3.00e11, 0.6e11, 3.00e14, Bcg),
        GalaxyRecord::new("Abell 1835", 3.00e10, 1.0e10, 1.20e12, 0.3e12, 1.10e15, Bcg),
        GalaxyRecord::new("Hydra A", 1.00e9, 0.3e9, 1.00e12, 0.2e12, 5.50e14, Bcg),
        GalaxyRecord::new("MS0735", 1.00e10, 0.4e10, 1.10e12, 0.3e12, 9.00e14, Bcg),
        GalaxyRecord::new("Abell 2029", 1.00e10, 0.3e10, 1.00e12, 0.2e12, 8.00e14, Bcg),
        GalaxyRecord::new("Perseus", 3.40e8, 0.8e8, 2.50e11, 0.5e11, 6.00e14, Bcg),
        GalaxyRecord::new("Abell 478", 8.00e9, 2.0e9, 1.00e12, 0.2e12, 7.00e14, Bcg),
        GalaxyRecord::new("Abell 2199", 1.50e9, 0.5e9, 8.00e11, 2.0e11, 4.00e14, Bcg),
        GalaxyRecord::new("PKS 0745", 5.00e9, 1.5e9, 9.00e11, 2.0e11, 8.50e14, Bcg),
    ]
}

/// The 8 comparison field galaxies.
pub fn field_sample() -> Vec<GalaxyRecord> {
    use Category::Field;
    vec![
        GalaxyRecord::new("Sombrero", 1.00e9, 0.1e9, 1.40e11, 0.2e11, 1.00e13, Field),
        GalaxyRecord::new("M60", 4.50e9, 1.0e9, 5.50e11, 0.5e11, 8.00e13, Field),
        GalaxyRecord::new("M49", 2.40e9, 0.5e9, 6.00e11, 0.5e11, 1.00e14, Field),
        GalaxyRecord::new("M31", 1.40e8, 0.3e8, 1.00e11, 0.2e11, 1.50e12, Field),
        GalaxyRecord::new("Milky Way", 4.10e6, 0.1e6, 5.00e10, 0.5e10, 1.20e12, Field),
        GalaxyRecord::new("NGC 3377", 1.80e8, 0.5e8, 3.00e10, 0.5e10, 5.00e11, Field),
        GalaxyRecord::new("NGC 3115", 2.00e9, 0.4e9, 2.00e11, 0.3e11, 5.00e12, Field),
        GalaxyRecord::new("Cen A", 5.50e7, 0.3e7, 1.00e11, 0.2e11, 2.00e12, Field),
    ]
}

/// Both samples, BCGs first. Validated before any statistics run.
pub fn full_sample() -> Vec<GalaxyRecord> {
    let mut all = bcg_sample();
    all.extend(field_sample());
    all
}

pub fn validate_all(records: &[GalaxyRecord]) -> Result<()> {
    for r in records {
        r.validate()?;
    }
    Ok(())
}
