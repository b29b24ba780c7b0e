#![cfg(feature = "dev")]

use geoscrub::internals::engine::pipeline::{run_pipeline, FilterMode, FilterParams};

fn params(mode: FilterMode) -> FilterParams<f64> {
    FilterParams {
        global_variation_pct: 30.0,
        local_variation_pct: 10.0,
        radius: 2.5,
        mode,
        min_neighbours: 3,
        wedge_angle_deg: 45.0,
    }
}

#[test]
fn test_stages_compose() {
    // A line of points: index 4 is a gross outlier (global stage), index 2
    // is locally implausible but inside the global band (local stage)
    let x: Vec<f64> = (0..9).map(|i| i as f64).collect();
    let y = vec![0.0; 9];
    let mut values = vec![100.0; 9];
    values[4] = 500.0;
    values[2] = 120.0;

    let outcome = run_pipeline(&x, &y, &values, &params(FilterMode::Isotropic));

    assert_eq!(outcome.global_removed, 1);
    assert_eq!(outcome.local_removed, 1);
    assert_eq!(outcome.keep.len(), 9);
    assert!(!outcome.keep[4]);
    assert!(!outcome.keep[2]);
    assert_eq!(outcome.kept_positions, vec![0, 1, 3, 5, 6, 7, 8]);
}

#[test]
fn test_globally_removed_point_never_serves_as_neighbor() {
    // The 500 at index 4 sits between index 3 and 5; had it survived into
    // the local stage its value would shift their neighborhood medians.
    // Their survival proves it was gone before neighbors were gathered.
    let x: Vec<f64> = (0..9).map(|i| i as f64).collect();
    let y = vec![0.0; 9];
    let mut values = vec![100.0; 9];
    values[4] = 500.0;

    let outcome = run_pipeline(&x, &y, &values, &params(FilterMode::Isotropic));
    assert!(outcome.keep[3]);
    assert!(outcome.keep[5]);
    assert_eq!(outcome.local_removed, 0);
}

#[test]
fn test_empty_global_survivor_set_short_circuits() {
    // A negative median rejects every value in the global stage
    let x = [0.0, 1.0, 2.0];
    let y = [0.0; 3];
    let values = [-10.0, -5.0, -1.0];

    let outcome = run_pipeline(&x, &y, &values, &params(FilterMode::Isotropic));
    assert_eq!(outcome.keep, vec![false, false, false]);
    assert_eq!(outcome.global_removed, 3);
    assert_eq!(outcome.local_removed, 0);
    assert!(outcome.kept_positions.is_empty());
}

#[test]
fn test_empty_input() {
    let outcome = run_pipeline::<f64>(&[], &[], &[], &params(FilterMode::Isotropic));
    assert!(outcome.keep.is_empty());
    assert_eq!(outcome.global_removed, 0);
    assert_eq!(outcome.local_removed, 0);
}

#[test]
fn test_mode_dispatch() {
    // Cross-track disagreement: the isotropic filter rejects the center,
    // the anisotropic filter sees only the along-track neighbors and keeps it
    let x = [0.0, 1.0, -1.0, 0.0, 0.0];
    let y = [0.0, 0.0, 0.0, 1.0, -1.0];
    let values = [10.0, 10.0, 10.0, 1000.0, 1000.0];

    let mut p = params(FilterMode::Isotropic);
    p.global_variation_pct = 10_000.0;
    p.radius = 2.0;

    let iso = run_pipeline(&x, &y, &values, &p);
    assert!(!iso.keep[0]);

    p.mode = FilterMode::Anisotropic;
    let aniso = run_pipeline(&x, &y, &values, &p);
    assert!(aniso.keep[0]);
}

#[test]
fn test_deterministic_under_permutation() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [0.0; 6];
    let values = [100.0, 100.0, 130.0, 100.0, 100.0, 100.0];
    let p = params(FilterMode::Isotropic);

    let outcome = run_pipeline(&x, &y, &values, &p);

    // Feed the same points in reverse; verdicts must follow the points
    let xr: Vec<f64> = x.iter().rev().copied().collect();
    let vr: Vec<f64> = values.iter().rev().copied().collect();
    let reversed = run_pipeline(&xr, &y, &vr, &p);

    let undone: Vec<bool> = reversed.keep.iter().rev().copied().collect();
    assert_eq!(outcome.keep, undone);
    assert_eq!(outcome.global_removed, reversed.global_removed);
    assert_eq!(outcome.local_removed, reversed.local_removed);
}

#[test]
fn test_counts_partition_input() {
    let x: Vec<f64> = (0..9).map(|i| i as f64).collect();
    let y = vec![0.0; 9];
    let mut values = vec![100.0; 9];
    values[4] = 500.0;
    values[2] = 120.0;

    let outcome = run_pipeline(&x, &y, &values, &params(FilterMode::Isotropic));
    let kept = outcome.keep.iter().filter(|&&k| k).count();
    assert_eq!(
        kept + outcome.global_removed + outcome.local_removed,
        values.len()
    );
}
