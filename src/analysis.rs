//! analysis.rs — The one-shot statistics pipeline.
//!
//! Everything here is pure computation over the literature catalog: validate,
//! derive, correlate, fit. Nothing is written to disk until the whole summary
//! has been produced, so a failing run leaves no partial output behind.

use crate::catalog::{self, Category};
use crate::config::AnalysisConfig;
use crate::core::derived::{self, DerivedRecord};
use crate::core::powerlaw::{self, PowerLawFit};
use crate::core::spearman::{self, SpearmanResult};
use crate::core::stats::{mean, median};
use crate::core::ttest::{self, WelchTTest};
use crate::core::unified::{self, UnifiedRelation};
use crate::error::Result;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Clone, Debug, Serialize)]
pub struct GroupSummary {
    pub n: usize,
    pub mean_fraction: f64,
    pub median_fraction: f64,
}

/// Leave-one-out result tagged with the galaxy it removed.
#[derive(Clone, Debug, Serialize)]
pub struct NamedExclusion {
    pub name: String,
    pub spearman: SpearmanResult,
    pub delta_rho: f64,
    pub fraction_fit: PowerLawFit,
}

#[derive(Clone, Debug, Serialize)]
pub struct AnalysisSummary {
    pub field_baseline: f64,
    pub bcg: GroupSummary,
    pub field: GroupSummary,
    /// mean BCG fraction over mean field fraction.
    pub enhancement_factor: f64,
    pub welch: WelchTTest,
    /// Spearman of (cluster mass, mass fraction) over the BCGs.
    pub spearman_full: SpearmanResult,
    /// The configured headline exclusion (Phoenix A by default), when the
    /// named galaxy is present in the BCG sample.
    pub headline_exclusion: Option<NamedExclusion>,
    /// The exclusion that moves rho the most, found by a full scan.
    pub most_influential: NamedExclusion,
    /// Power-law fit of mass fraction vs cluster mass over the BCGs.
    pub fraction_fit: PowerLawFit,
    pub unified: UnifiedRelation,
    /// Significance threshold the report labels against.
    pub alpha: f64,
    /// All 22 derived records, BCGs first.
    pub derived: Vec<DerivedRecord>,
}

impl AnalysisSummary {
    pub fn bcg_records(&self) -> impl Iterator<Item = &DerivedRecord> {
        self.derived
            .iter()
            .filter(|d| d.record.category == Category::Bcg)
    }

    pub fn field_records(&self) -> impl Iterator<Item = &DerivedRecord> {
        self.derived
            .iter()
            .filter(|d| d.record.category == Category::Field)
    }
}

/// Run the full pipeline over the built-in literature catalog.
pub fn run(config: &AnalysisConfig) -> Result<AnalysisSummary> {
    let records = catalog::full_sample();
    catalog::validate_all(&records)?;
    info!(
        bcg = records.iter().filter(|r| r.category == Category::Bcg).count(),
        field = records.iter().filter(|r| r.category == Category::Field).count(),
        "catalog validated"
    );

    let baseline = derived::field_baseline(&records)?;
    let derived = derived::derive_all(&records, baseline)?;
    debug!(baseline, "field baseline fraction");

    let bcg_fractions: Vec<f64> = derived
        .iter()
        .filter(|d| d.record.category == Category::Bcg)
        .map(|d| d.mass_fraction)
        .collect();
    let field_fractions: Vec<f64> = derived
        .iter()
        .filter(|d| d.record.category == Category::Field)
        .map(|d| d.mass_fraction)
        .collect();
    let cluster_masses: Vec<f64> = derived
        .iter()
        .filter(|d| d.record.category == Category::Bcg)
        .map(|d| d.record.m_host)
        .collect();
    let bcg_names: Vec<&str> = derived
        .iter()
        .filter(|d| d.record.category == Category::Bcg)
        .map(|d| d.record.name)
        .collect();

    let welch = ttest::welch_t_test(&bcg_fractions, &field_fractions)?;
    let spearman_full = spearman::spearman(&cluster_masses, &bcg_fractions)?;
    let fraction_fit = powerlaw::fit(&cluster_masses, &bcg_fractions)?;

    let named_exclusion = |idx: usize| -> Result<NamedExclusion> {
        let sp = spearman::spearman_excluding(&cluster_masses, &bcg_fractions, idx)?;
        Ok(NamedExclusion {
            name: bcg_names[idx].to_string(),
            spearman: sp,
            delta_rho: sp.rho - spearman_full.rho,
            fraction_fit: powerlaw::fit_excluding(&cluster_masses, &bcg_fractions, idx)?,
        })
    };

    let headline_exclusion = bcg_names
        .iter()
        .position(|&n| n == config.stats.headline_exclusion)
        .map(&named_exclusion)
        .transpose()?;

    let (_, top_idx) = spearman::most_influential(&cluster_masses, &bcg_fractions)?;
    let most_influential = named_exclusion(top_idx)?;

    let unified = unified::unified_relation(&derived)?;

    Ok(AnalysisSummary {
        field_baseline: baseline,
        bcg: GroupSummary {
            n: bcg_fractions.len(),
            mean_fraction: mean(&bcg_fractions),
            median_fraction: median(&bcg_fractions),
        },
        field: GroupSummary {
            n: field_fractions.len(),
            mean_fraction: mean(&field_fractions),
            median_fraction: median(&field_fractions),
        },
        enhancement_factor: mean(&bcg_fractions) / baseline,
        welch,
        spearman_full,
        headline_exclusion,
        most_influential,
        fraction_fit,
        unified,
        alpha: config.stats.alpha,
        derived,
    })
}
