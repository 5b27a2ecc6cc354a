use ising_scan::beta_range::{BetaRange, MAX_POINTS};
use ising_scan::config::ScanConfig;
use ising_scan::error::IsingError;

#[test]
fn test_reference_range_hits_endpoint_once() {
    let values = BetaRange::new(0.1, 1.5, 0.1).unwrap().values();

    assert_eq!(values.len(), 15);
    assert_eq!(values[0], 0.1);
    assert_eq!(*values.last().unwrap(), 1.5);
    assert_eq!(values.iter().filter(|&&b| (b - 1.5).abs() < 1e-9).count(), 1);
    assert!(values.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_values_are_clean_decimals() {
    let values = BetaRange::new(0.1, 0.5, 0.1).unwrap().values();
    assert_eq!(values, vec![0.1, 0.2, 0.3, 0.4, 0.5]);
}

#[test]
fn test_single_point_range() {
    let values = BetaRange::new(0.44, 0.44, 0.1).unwrap().values();
    assert_eq!(values, vec![0.44]);
}

#[test]
fn test_max_off_grid_is_not_overshot() {
    let values = BetaRange::new(0.2, 1.0, 0.25).unwrap().values();
    assert_eq!(values, vec![0.2, 0.45, 0.7, 0.95]);
}

#[test]
fn test_invalid_ranges() {
    for (min, max, step) in [
        (0.0, 1.0, 0.1),
        (-0.5, 1.0, 0.1),
        (0.1, 1.0, 0.0),
        (0.1, 1.0, -0.1),
        (1.0, 0.5, 0.1),
        (0.1, f64::INFINITY, 0.1),
        (0.1, 1.0, f64::NAN),
    ] {
        assert!(
            matches!(BetaRange::new(min, max, step), Err(IsingError::InvalidBetaRange { .. })),
            "{min}..={max} step {step} should be rejected"
        );
    }
}

#[test]
fn test_oversized_grid_rejected() {
    for (min, max, step) in [
        (0.1, 1e300, 1e-300),
        (0.1, 1.0, 1e-310),
        (0.1, 0.1 + MAX_POINTS as f64, 1.0),
    ] {
        match BetaRange::new(min, max, step) {
            Err(IsingError::InvalidBetaRange { reason, .. }) => assert_eq!(reason, "too many grid points"),
            other => panic!("{min}..={max} step {step}: unexpected {other:?}"),
        }
    }

    // Just under the cap is still a valid grid.
    let r = BetaRange::new(1.0, (MAX_POINTS - 1) as f64, 1.0).unwrap();
    assert_eq!(r.len(), MAX_POINTS - 1);
}

#[test]
fn test_small_magnitude_grid_stays_distinct() {
    let values = BetaRange::new(1e-13, 1e-12, 1e-13).unwrap().values();

    assert_eq!(values.len(), 10);
    assert!(values.iter().all(|&b| b > 0.0), "non-positive beta in {values:?}");
    assert!(values.windows(2).all(|w| w[1] > w[0]), "grid not increasing: {values:?}");
    assert!((values[9] - 1e-12).abs() < 1e-24);

    let cfg = ScanConfig { betas: values, ..ScanConfig::default() };
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_fine_step_near_one_stays_distinct() {
    let values = BetaRange::new(1.0, 1.0 + 1e-12, 1e-13).unwrap().values();
    assert_eq!(values.len(), 11);
    assert!(values.windows(2).all(|w| w[1] > w[0]), "grid not increasing: {values:?}");
}
