//! figures.rs — The three paper figures, rendered with plotters.
//!
//! Axes are log10-transformed up front and drawn on linear coordinates,
//! which keeps the chart ranges simple for these few decades of mass.

use crate::analysis::AnalysisSummary;
use crate::catalog::Category;
use crate::config::FigureConfig;
use crate::core::powerlaw::PowerLawFit;
use plotters::prelude::*;
use std::error::Error;
use std::fs::create_dir_all;
use std::path::Path;

const BCG_COLOR: RGBColor = RGBColor(230, 57, 70);
const FIELD_COLOR: RGBColor = RGBColor(69, 123, 157);

/// Render all three figures into `out_dir`. Called only after the summary
/// has been fully computed, so a statistics failure writes nothing.
pub fn render_all(
    out_dir: &Path,
    summary: &AnalysisSummary,
    cfg: &FigureConfig,
) -> Result<(), Box<dyn Error>> {
    create_dir_all(out_dir)?;
    render_correlation(&out_dir.join("fig1_correlation.png"), summary, cfg)?;
    render_comparison(&out_dir.join("fig2_comparison.png"), summary, cfg)?;
    render_unified(&out_dir.join("fig3_unified.png"), summary, cfg)?;
    Ok(())
}

fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    let pad = 0.08 * (hi - lo).max(0.5);
    (lo - pad, hi + pad)
}

fn fit_segment(fit: &PowerLawFit, x_range: (f64, f64)) -> Vec<(f64, f64)> {
    // The fit lives in log10 space, so the line is exact with two points;
    // a short polyline keeps the drawing code uniform.
    (0..=32)
        .map(|i| {
            let x = x_range.0 + (x_range.1 - x_range.0) * i as f64 / 32.0;
            (x, fit.intercept + fit.slope * x)
        })
        .collect()
}

/// Fig 1: BCG mass fraction vs cluster mass with the fitted power law.
fn render_correlation(
    out_path: &Path,
    summary: &AnalysisSummary,
    cfg: &FigureConfig,
) -> Result<(), Box<dyn Error>> {
    let points: Vec<(f64, f64)> = summary
        .bcg_records()
        .map(|d| (d.record.m_host.log10(), d.mass_fraction.log10()))
        .collect();
    let x_range = padded_range(points.iter().map(|p| p.0));
    let y_range = padded_range(points.iter().map(|p| p.1));

    let sp = &summary.spearman_full;
    let caption = format!(
        "Overmassiveness vs Cluster Mass (Spearman rho = {:.2}, p = {:.3})",
        sp.rho, sp.p_value
    );

    let root = BitMapBackend::new(out_path, (cfg.width, cfg.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    chart
        .configure_mesh()
        .x_desc("log10 M_cluster [M_sun]")
        .y_desc("log10 M_BH/M_*")
        .draw()?;

    // Field-average reference level.
    let baseline = summary.field_baseline.log10();
    chart
        .draw_series(LineSeries::new(
            [(x_range.0, baseline), (x_range.1, baseline)],
            FIELD_COLOR.stroke_width(2),
        ))?
        .label("field average")
        .legend(|(x, y)| PathElement::new([(x, y), (x + 18, y)], FIELD_COLOR.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            fit_segment(&summary.fraction_fit, x_range),
            BLACK.stroke_width(2),
        ))?
        .label(format!(
            "fit: slope {:.2} +/- {:.2}",
            summary.fraction_fit.slope, summary.fraction_fit.std_err
        ))
        .legend(|(x, y)| PathElement::new([(x, y), (x + 18, y)], BLACK.stroke_width(2)));

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 6, BCG_COLOR.filled())),
        )?
        .label("BCGs")
        .legend(|(x, y)| Circle::new((x + 9, y), 5, BCG_COLOR.filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.85))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Fig 2: field vs BCG mass-fraction distributions, boxes plus the points.
fn render_comparison(
    out_path: &Path,
    summary: &AnalysisSummary,
    cfg: &FigureConfig,
) -> Result<(), Box<dyn Error>> {
    let field: Vec<f64> = summary
        .field_records()
        .map(|d| d.mass_fraction * 100.0)
        .collect();
    let bcg: Vec<f64> = summary
        .bcg_records()
        .map(|d| d.mass_fraction * 100.0)
        .collect();

    let y_max = bcg
        .iter()
        .chain(&field)
        .cloned()
        .fold(0.0f64, f64::max)
        * 1.2;

    let caption = format!(
        "BCG Black Holes are Overmassive ({:.1}x, Welch p = {:.3})",
        summary.enhancement_factor, summary.welch.p_value
    );

    let root = BitMapBackend::new(out_path, (cfg.width, cfg.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels = ["Field", "BCG"];
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(labels[..].into_segmented(), 0.0f32..y_max as f32)?;

    chart
        .configure_mesh()
        .y_desc("M_BH/M_* [%]")
        .draw()?;

    for (label, values, color) in [
        (&labels[0], &field, FIELD_COLOR),
        (&labels[1], &bcg, BCG_COLOR),
    ] {
        let quartiles = Quartiles::new(values);
        chart.draw_series([Boxplot::new_vertical(SegmentValue::CenterOf(label), &quartiles)
            .width(60)
            .style(color)])?;
        chart.draw_series(values.iter().map(|&v| {
            Circle::new(
                (SegmentValue::CenterOf(label), v as f32),
                4,
                BLACK.mix(0.5).filled(),
            )
        }))?;
    }

    root.present()?;
    Ok(())
}

/// Fig 3: merged M_BH vs M_host relation across both populations.
fn render_unified(
    out_path: &Path,
    summary: &AnalysisSummary,
    cfg: &FigureConfig,
) -> Result<(), Box<dyn Error>> {
    let log_pairs = |cat: Category| -> Vec<(f64, f64)> {
        summary
            .derived
            .iter()
            .filter(|d| d.record.category == cat)
            .map(|d| (d.record.m_host.log10(), d.record.m_bh.log10()))
            .collect()
    };
    let bcg = log_pairs(Category::Bcg);
    let field = log_pairs(Category::Field);

    let x_range = padded_range(bcg.iter().chain(&field).map(|p| p.0));
    let y_range = padded_range(bcg.iter().chain(&field).map(|p| p.1));

    let fit = &summary.unified.combined;
    let caption = format!(
        "Unified Scaling Relation (slope = {:.2} +/- {:.2}, R2 = {:.2})",
        fit.slope, fit.std_err, fit.r_squared
    );

    let root = BitMapBackend::new(out_path, (cfg.width, cfg.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    chart
        .configure_mesh()
        .x_desc("log10 M_host [M_sun]")
        .y_desc("log10 M_BH [M_sun]")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            fit_segment(fit, x_range),
            BLACK.stroke_width(2),
        ))?
        .label("combined fit")
        .legend(|(x, y)| PathElement::new([(x, y), (x + 18, y)], BLACK.stroke_width(2)));

    chart
        .draw_series(
            field
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 6, FIELD_COLOR.filled())),
        )?
        .label("field galaxies")
        .legend(|(x, y)| Circle::new((x + 9, y), 5, FIELD_COLOR.filled()));

    chart
        .draw_series(
            bcg.iter()
                .map(|&(x, y)| TriangleMarker::new((x, y), 7, BCG_COLOR.filled())),
        )?
        .label("BCGs")
        .legend(|(x, y)| TriangleMarker::new((x + 9, y), 6, BCG_COLOR.filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.85))
        .draw()?;

    root.present()?;
    Ok(())
}
