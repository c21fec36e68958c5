//! report.rs — Console summary of one analysis run.

use crate::analysis::AnalysisSummary;
use crate::core::powerlaw::PowerLawFit;
use std::fmt::Write;

const BAR: &str =
    "======================================================================";
const RULE: &str =
    "----------------------------------------------------------------------";

fn significance_label(p: f64, alpha: f64) -> &'static str {
    if p < alpha / 50.0 {
        "extremely significant"
    } else if p < alpha / 5.0 {
        "highly significant"
    } else if p < alpha {
        "significant"
    } else if p < 2.0 * alpha {
        "marginal"
    } else {
        "not significant"
    }
}

fn fit_line(out: &mut String, label: &str, fit: &PowerLawFit) {
    let _ = writeln!(
        out,
        "  {label:<22} slope = {:+.3} \u{00b1} {:.3}   R\u{00b2} = {:.3}   N = {}",
        fit.slope, fit.std_err, fit.r_squared, fit.n
    );
}

/// Render the full sectioned report.
pub fn render(summary: &AnalysisSummary) -> String {
    let mut out = String::new();
    let alpha = summary.alpha;

    let _ = writeln!(out, "{BAR}");
    let _ = writeln!(out, "OVERMASSIVE BCG BLACK HOLE ANALYSIS");
    let _ = writeln!(out, "{BAR}");
    let _ = writeln!(
        out,
        "Samples: {} BCGs, {} field galaxies ({} total)",
        summary.bcg.n,
        summary.field.n,
        summary.bcg.n + summary.field.n
    );

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "BCG vs FIELD MASS FRACTIONS");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "  Field mean M_BH/M_* = {:.6} ({:.3}%)   median = {:.3}%",
        summary.field.mean_fraction,
        summary.field.mean_fraction * 100.0,
        summary.field.median_fraction * 100.0
    );
    let _ = writeln!(
        out,
        "  BCG   mean M_BH/M_* = {:.6} ({:.3}%)   median = {:.3}%",
        summary.bcg.mean_fraction,
        summary.bcg.mean_fraction * 100.0,
        summary.bcg.median_fraction * 100.0
    );
    let _ = writeln!(
        out,
        "  Enhancement factor  = {:.2}x",
        summary.enhancement_factor
    );
    let _ = writeln!(
        out,
        "  Welch t-test: t = {:.3}, df = {:.1}, p = {:.4} ({})",
        summary.welch.t_statistic,
        summary.welch.df,
        summary.welch.p_value,
        significance_label(summary.welch.p_value, alpha)
    );

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "CORRELATION: OVERMASSIVENESS vs CLUSTER MASS");
    let _ = writeln!(out, "{RULE}");
    let sp = &summary.spearman_full;
    let _ = writeln!(
        out,
        "  Spearman rho = {:.3}, p = {:.4} ({}), N = {}{}",
        sp.rho,
        sp.p_value,
        significance_label(sp.p_value, alpha),
        sp.n,
        if sp.approximate {
            "  [t-approximation, N < 10]"
        } else {
            ""
        }
    );

    if let Some(ex) = &summary.headline_exclusion {
        let _ = writeln!(
            out,
            "  Without {}: rho = {:.3}, p = {:.4} (delta rho = {:+.3})",
            ex.name, ex.spearman.rho, ex.spearman.p_value, ex.delta_rho
        );
    }
    let mi = &summary.most_influential;
    let _ = writeln!(
        out,
        "  Most influential point: {} (removing it shifts rho by {:+.3})",
        mi.name, mi.delta_rho
    );

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "PER-BCG OVERMASS FACTORS (vs field baseline {:.5})", summary.field_baseline);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "  {:<12} {:>10} {:>12} {:>10}",
        "Galaxy", "M_BH/M_*", "M_cluster", "Factor"
    );
    for d in summary.bcg_records() {
        let _ = writeln!(
            out,
            "  {:<12} {:>9.2}% {:>12.2e} {:>9.1}x",
            d.record.name,
            d.mass_fraction * 100.0,
            d.record.m_host,
            d.overmass_factor
        );
    }

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "POWER LAW: M_BH/M_* vs M_cluster (BCGs)");
    let _ = writeln!(out, "{RULE}");
    fit_line(&mut out, "full sample", &summary.fraction_fit);
    if let Some(ex) = &summary.headline_exclusion {
        fit_line(&mut out, &format!("without {}", ex.name), &ex.fraction_fit);
    }

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "UNIFIED RELATION: M_BH vs M_host (BCG + field)");
    let _ = writeln!(out, "{RULE}");
    fit_line(&mut out, "combined", &summary.unified.combined);
    fit_line(&mut out, "BCGs only", &summary.unified.bcg_only);
    fit_line(&mut out, "field only", &summary.unified.field_only);
    let deficit = summary.unified.r_squared_deficit();
    let _ = writeln!(
        out,
        "  Merged-fit R\u{00b2} deficit vs per-group fits: {deficit:+.3}{}",
        if deficit > -0.1 {
            "  (consistent with one underlying relation)"
        } else {
            "  (populations diverge)"
        }
    );

    let _ = writeln!(out, "{BAR}");
    out
}
