use overmassive::core::powerlaw::{fit, fit_excluding};
use overmassive::core::spearman::most_influential;
use overmassive::error::AnalysisError;

#[test]
fn recovers_y_equals_three_x_squared() {
    let x = [0.5, 1.0, 2.0, 3.0, 7.0];
    let y: Vec<f64> = x.iter().map(|&v| 3.0 * v * v).collect();
    let f = fit(&x, &y).unwrap();
    assert!((f.slope - 2.0).abs() < 1e-9);
    assert!((f.amplitude - 3.0).abs() < 1e-8);
    assert!((f.r_squared - 1.0).abs() < 1e-12);
}

#[test]
fn three_point_identity_scenario_has_unit_slope() {
    let x = [1.0, 2.0, 3.0];
    let y = [1.0, 2.0, 3.0];
    let f = fit(&x, &y).unwrap();
    assert!((f.slope - 1.0).abs() < 1e-9);
    assert!((f.r_squared - 1.0).abs() < 1e-12);
}

#[test]
fn non_positive_values_cannot_be_log_transformed() {
    match fit(&[1.0, 2.0, 3.0], &[1.0, 0.0, 3.0]) {
        Err(AnalysisError::InvalidInput(_)) => {}
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn removing_the_high_leverage_point_shifts_and_restores_the_slope() {
    // Slope-1 relation with one extreme overmassive outlier at the top end.
    let x = [1.0e12, 3.0e12, 1.0e13, 3.0e13, 2.4e15];
    let y = [1.0e7, 3.0e7, 1.0e8, 3.0e8, 1.0e11];
    let full = fit(&x, &y).unwrap();
    let trimmed = fit_excluding(&x, &y, 4).unwrap();

    assert_eq!(trimmed.excluded, Some(4));
    assert!((trimmed.slope - 1.0).abs() < 1e-9);
    let shift = full.slope - trimmed.slope;
    assert!(shift.abs() > 0.01, "outlier must carry measurable leverage");

    // Deterministic: the same inputs reproduce both slopes bit for bit.
    let full_again = fit(&x, &y).unwrap();
    let trimmed_again = fit_excluding(&x, &y, 4).unwrap();
    assert_eq!(full.slope.to_bits(), full_again.slope.to_bits());
    assert_eq!(trimmed.slope.to_bits(), trimmed_again.slope.to_bits());
}

#[test]
fn influence_scan_agrees_with_manual_leave_one_out() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let y = [2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 1.0];
    let (scan, top) = most_influential(&x, &y).unwrap();
    assert_eq!(top, 6);
    // Removing the inverted tail restores the perfect rank ordering.
    assert!((scan[6].result.rho - 1.0).abs() < 1e-9);
    // Removing a mid-trend point barely moves rho.
    assert!(scan[2].delta_rho.abs() < scan[6].delta_rho.abs());
}
