//! core/unified.rs — Does one relation span BCGs and field galaxies?
//!
//! Fits M_BH vs host mass for the merged sample and for each group alone.
//! If the merged R^2 is comparable to the per-group ones, the two
//! populations are consistent with a single underlying scaling relation.

use crate::catalog::Category;
use crate::core::derived::DerivedRecord;
use crate::core::powerlaw::{self, PowerLawFit};
use crate::error::Result;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct UnifiedRelation {
    pub combined: PowerLawFit,
    pub bcg_only: PowerLawFit,
    pub field_only: PowerLawFit,
}

impl UnifiedRelation {
    /// Merged-fit R^2 minus the worse of the two per-group R^2 values.
    /// Near-zero or positive means merging costs nothing.
    pub fn r_squared_deficit(&self) -> f64 {
        self.combined.r_squared - self.bcg_only.r_squared.min(self.field_only.r_squared)
    }
}

/// Regress black-hole mass on host mass, merged and per group.
pub fn unified_relation(derived: &[DerivedRecord]) -> Result<UnifiedRelation> {
    let pairs = |cat: Option<Category>| -> (Vec<f64>, Vec<f64>) {
        derived
            .iter()
            .filter(|d| cat.map_or(true, |c| d.record.category == c))
            .map(|d| (d.record.m_host, d.record.m_bh))
            .unzip()
    };

    let (all_x, all_y) = pairs(None);
    let (bcg_x, bcg_y) = pairs(Some(Category::Bcg));
    let (field_x, field_y) = pairs(Some(Category::Field));

    Ok(UnifiedRelation {
        combined: powerlaw::fit(&all_x, &all_y)?,
        bcg_only: powerlaw::fit(&bcg_x, &bcg_y)?,
        field_only: powerlaw::fit(&field_x, &field_y)?,
    })
}
