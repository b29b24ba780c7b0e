#![cfg(feature = "dev")]

use geoscrub::internals::algorithms::anisotropic::anisotropic_filter;
use geoscrub::internals::algorithms::isotropic::isotropic_filter;
use geoscrub::internals::algorithms::local::LocalParams;

fn params(radius: f64, variation_pct: f64, min_neighbours: usize) -> LocalParams<f64> {
    LocalParams {
        radius,
        variation_pct,
        min_neighbours,
    }
}

#[test]
fn test_empty_input() {
    let mask = anisotropic_filter::<f64>(&[], &[], &[], &params(10.0, 10.0, 3), 45.0);
    assert!(mask.is_empty());
}

#[test]
fn test_outlier_on_a_pass_rejected() {
    // A pass along the x axis; the center value breaks the line
    let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let y = [0.0; 7];
    let mut values = [10.0; 7];
    values[3] = 100.0;

    let mask = anisotropic_filter(&x, &y, &values, &params(2.5, 10.0, 3), 45.0);
    assert!(!mask[3]);
    assert!(mask[0] && mask[1] && mask[2] && mask[4] && mask[5] && mask[6]);
}

#[test]
fn test_cross_track_values_ignored() {
    // Along-track neighbors agree with the center; cross-track neighbors
    // are far off but lie outside the wedge. The isotropic filter rejects
    // the center, the anisotropic filter keeps it.
    let x = [0.0, 1.0, -1.0, 0.0, 0.0];
    let y = [0.0, 0.0, 0.0, 1.0, -1.0];
    let values = [10.0, 10.0, 10.0, 1000.0, 1000.0];
    let p = params(2.0, 10.0, 3);

    let iso = isotropic_filter(&x, &y, &values, &p);
    assert!(!iso[0]);

    let aniso = anisotropic_filter(&x, &y, &values, &p, 45.0);
    assert!(aniso[0]);
}

#[test]
fn test_wedge_fallback_still_judges() {
    // A degenerate wedge leaves no directional neighbors, so the filter
    // falls back to the full spatial set. The center must still be judged
    // against that median, not kept by default.
    let x = [0.0, (20.0f64).to_radians().cos(), (40.0f64).to_radians().cos()];
    let y = [0.0, (20.0f64).to_radians().sin(), (40.0f64).to_radians().sin()];
    let values = [100.0, 10.0, 10.0];

    let mask = anisotropic_filter(&x, &y, &values, &params(1.5, 10.0, 3), 4.0);
    assert!(!mask[0]);
}

#[test]
fn test_single_neighbor_auto_keep() {
    // Below the directional minimum of two neighbors there is no evidence
    let x = [0.0, 1.0];
    let y = [0.0, 0.0];
    let values = [100.0, 10.0];

    let mask = anisotropic_filter(&x, &y, &values, &params(2.0, 10.0, 3), 45.0);
    assert_eq!(mask, vec![true, true]);
}

#[test]
fn test_min_neighbours_capped_at_two() {
    // min_neighbours 5 does not auto-keep a point with two lined-up
    // neighbors; the directional minimum caps at 2
    let x = [0.0, 1.0, -1.0];
    let y = [0.0, 0.0, 0.0];
    let values = [100.0, 10.0, 10.0];

    let mask = anisotropic_filter(&x, &y, &values, &params(2.0, 10.0, 5), 45.0);
    assert!(!mask[0]);
}

#[test]
fn test_zero_radius_keeps_everything() {
    let x = [0.0, 0.1, 0.2];
    let y = [0.0, 0.0, 0.0];
    let values = [1.0, 1000.0, 1.0];

    let mask = anisotropic_filter(&x, &y, &values, &params(0.0, 10.0, 1), 45.0);
    assert_eq!(mask, vec![true, true, true]);
}

#[test]
fn test_order_independence() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0; 5];
    let values = [10.0, 10.0, 100.0, 10.0, 10.0];
    let p = params(2.5, 10.0, 2);

    let mask = anisotropic_filter(&x, &y, &values, &p, 45.0);

    let xr: Vec<f64> = x.iter().rev().copied().collect();
    let vr: Vec<f64> = values.iter().rev().copied().collect();
    let mask_rev = anisotropic_filter(&xr, &y, &vr, &p, 45.0);

    let mask_rev_undone: Vec<bool> = mask_rev.iter().rev().copied().collect();
    assert_eq!(mask, mask_rev_undone);
}
