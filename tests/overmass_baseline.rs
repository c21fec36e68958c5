use overmassive::catalog::{field_sample, full_sample, Category, GalaxyRecord};
use overmassive::core::derived::{derive_all, field_baseline};
use overmassive::error::AnalysisError;

#[test]
fn baseline_is_the_exact_arithmetic_mean() {
    // Hand-built field records with round fraction values.
    let fractions = [0.003, 0.005, 0.004, 0.006];
    let records: Vec<GalaxyRecord> = fractions
        .iter()
        .enumerate()
        .map(|(i, &f)| GalaxyRecord {
            name: ["a", "b", "c", "d"][i],
            m_bh: f * 1.0e11,
            m_bh_err: 0.0,
            m_star: 1.0e11,
            m_star_err: 0.0,
            m_host: 1.0e12,
            category: Category::Field,
        })
        .collect();

    let baseline = field_baseline(&records).unwrap();
    assert!((baseline - 0.0045).abs() < 1e-15);
}

#[test]
fn bcg_records_are_ignored_by_the_baseline() {
    let all = full_sample();
    let field_only = field_sample();
    let a = field_baseline(&all).unwrap();
    let b = field_baseline(&field_only).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn baseline_without_field_records_is_invalid() {
    let bcg_only: Vec<GalaxyRecord> = full_sample()
        .into_iter()
        .filter(|r| r.category == Category::Bcg)
        .collect();
    match field_baseline(&bcg_only) {
        Err(AnalysisError::InvalidInput(_)) => {}
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn overmass_factor_scales_inversely_with_baseline() {
    let field = field_sample();
    let baseline = field_baseline(&field).unwrap();
    let derived = derive_all(&field, baseline).unwrap();
    let doubled = derive_all(&field, baseline * 2.0).unwrap();
    for (a, b) in derived.iter().zip(&doubled) {
        assert!((a.overmass_factor / b.overmass_factor - 2.0).abs() < 1e-12);
    }
}

#[test]
fn phoenix_a_is_the_most_overmassive_bcg() {
    let all = full_sample();
    let baseline = field_baseline(&all).unwrap();
    let derived = derive_all(&all, baseline).unwrap();
    let top = derived
        .iter()
        .filter(|d| d.record.category == Category::Bcg)
        .max_by(|a, b| a.overmass_factor.partial_cmp(&b.overmass_factor).unwrap())
        .unwrap();
    assert_eq!(top.record.name, "Phoenix A");
    // ~4% black hole against a ~0.47% field baseline.
    assert!(top.overmass_factor > 5.0);
}
