#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use geoscrub::internals::math::stats::{describe, StatValues};

#[test]
fn test_describe_empty() {
    let values: Vec<f64> = vec![];
    let stats = describe(&values);
    assert_eq!(stats, StatValues::empty());
    assert_eq!(stats.count, 0);
}

#[test]
fn test_describe_single_value() {
    let stats = describe(&[7.5]);
    assert_eq!(stats.count, 1);
    assert_relative_eq!(stats.min, 7.5);
    assert_relative_eq!(stats.max, 7.5);
    assert_relative_eq!(stats.mean, 7.5);
    // A single value has zero spread under the sample convention
    assert_relative_eq!(stats.std_dev, 0.0);
    assert_relative_eq!(stats.cv, 0.0);
}

#[test]
fn test_describe_known_sequence() {
    // mean = 5, sum of squared deviations = 32, sample variance = 32/7
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let stats = describe(&values);

    assert_eq!(stats.count, 8);
    assert_relative_eq!(stats.min, 2.0);
    assert_relative_eq!(stats.max, 9.0);
    assert_relative_eq!(stats.mean, 5.0);
    assert_relative_eq!(stats.std_dev, 2.138089935299395, epsilon = 1e-12);
    assert_relative_eq!(stats.cv, 42.7617987059879, epsilon = 1e-10);
}

#[test]
fn test_describe_zero_mean_has_zero_cv() {
    // cv would divide by zero; the convention is 0 instead
    let stats = describe(&[-1.0, 1.0]);
    assert_relative_eq!(stats.mean, 0.0);
    assert_relative_eq!(stats.std_dev, std::f64::consts::SQRT_2, epsilon = 1e-12);
    assert_relative_eq!(stats.cv, 0.0);
}

#[test]
fn test_describe_negative_mean_uses_absolute_value_for_cv() {
    let stats = describe(&[-2.0, -4.0]);
    assert_relative_eq!(stats.mean, -3.0);
    assert_relative_eq!(stats.std_dev, std::f64::consts::SQRT_2, epsilon = 1e-12);
    assert!(stats.cv > 0.0);
    assert_relative_eq!(stats.cv, std::f64::consts::SQRT_2 / 3.0 * 100.0, epsilon = 1e-10);
}

#[test]
fn test_describe_constant_sequence() {
    let stats = describe(&[5.0; 10]);
    assert_relative_eq!(stats.std_dev, 0.0);
    assert_relative_eq!(stats.cv, 0.0);
    assert_relative_eq!(stats.min, 5.0);
    assert_relative_eq!(stats.max, 5.0);
}
