use overmassive::core::rank::midranks;
use overmassive::core::spearman::spearman;
use overmassive::core::stats::pearson;
use overmassive::error::AnalysisError;

#[test]
fn rho_equals_pearson_of_rank_transforms() {
    // No ties, so the rank transform is a plain permutation.
    let x = [12.0, 2.0, 1.0, 12.5, 9.0, 7.0, 3.0, 8.0];
    let y = [1.0, 4.0, 7.0, 1.5, 2.0, 6.0, 9.0, 3.0];
    let engine = spearman(&x, &y).unwrap();
    let reference = pearson(&midranks(&x), &midranks(&y)).unwrap();
    assert!((engine.rho - reference).abs() < 1e-12);
}

#[test]
fn perfectly_increasing_pair_is_exactly_one() {
    let x: Vec<f64> = (1..=9).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|v| v * 3.0 + 1.0).collect();
    let r = spearman(&x, &y).unwrap();
    assert!((r.rho - 1.0).abs() < 1e-9);
}

#[test]
fn reversed_order_against_decreasing_pair_is_exactly_minus_one() {
    let x: Vec<f64> = (1..=9).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|v| 100.0 - 10.0 * v).collect();
    let r = spearman(&x, &y).unwrap();
    assert!((r.rho + 1.0).abs() < 1e-9);
}

#[test]
fn constant_sequence_raises_degenerate_input() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [2.5, 2.5, 2.5, 2.5];
    match spearman(&x, &y) {
        Err(AnalysisError::DegenerateInput(_)) => {}
        other => panic!("expected DegenerateInput, got {other:?}"),
    }
}

#[test]
fn three_point_identity_scenario() {
    // {(1,1), (2,2), (3,3)}: perfect monotonic association.
    let x = [1.0, 2.0, 3.0];
    let y = [1.0, 2.0, 3.0];
    let r = spearman(&x, &y).unwrap();
    assert!((r.rho - 1.0).abs() < 1e-9);
    assert!(r.p_value < 1e-9);
    assert_eq!(r.n, 3);
    assert!(r.approximate, "N = 3 must be flagged as an approximation");
}

#[test]
fn ties_use_the_mid_rank_policy() {
    // x has a tie at 2.0; spearman must still agree with pearson-of-midranks.
    let x = [1.0, 2.0, 2.0, 4.0, 5.0];
    let y = [2.0, 3.0, 5.0, 7.0, 11.0];
    let engine = spearman(&x, &y).unwrap();
    let reference = pearson(&midranks(&x), &midranks(&y)).unwrap();
    assert!((engine.rho - reference).abs() < 1e-12);
    assert!(engine.rho < 1.0, "a tie against distinct y cannot be perfect");
}
