//! Statistics helper tests: quantiles, std, and histogram binning.

use loanrisk_core::stats::{histogram, mean, median, quantile, std_dev, Describe};

/// Quantiles interpolate linearly between order statistics.
#[test]
fn quantiles_interpolate() {
    let values = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(quantile(&values, 0.25), Some(1.75));
    assert_eq!(quantile(&values, 0.50), Some(2.5));
    assert_eq!(quantile(&values, 0.75), Some(3.25));
    assert_eq!(quantile(&values, 0.0), Some(1.0));
    assert_eq!(quantile(&values, 1.0), Some(4.0));
}

/// Median of an even-length column is the midpoint of the two
/// central values; input order does not matter.
#[test]
fn median_is_midpoint() {
    assert_eq!(median(&[40000.0, 60000.0]), Some(50000.0));
    assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
    assert_eq!(median(&[]), None);
}

/// std is the sample standard deviation (ddof = 1).
#[test]
fn std_is_sample_std() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let expected = (32.0f64 / 7.0).sqrt();
    assert!((std_dev(&values) - expected).abs() < 1e-12);
    assert_eq!(std_dev(&[5.0]), 0.0);
    assert_eq!(std_dev(&[]), 0.0);
}

/// Describe carries all eight statistics.
#[test]
fn describe_full_shape() {
    let d = Describe::of(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(d.count, 4);
    assert_eq!(d.mean, 2.5);
    assert_eq!(d.min, 1.0);
    assert_eq!(d.max, 4.0);
    assert_eq!(d.q50, 2.5);
    assert!(Describe::of(&[]).is_none());
    assert_eq!(mean(&[]), None);
}

/// Every value lands in a bin; the maximum goes into the last one.
#[test]
fn histogram_covers_range() {
    let values: Vec<f64> = (0..=100).map(|i| i as f64).collect();
    let bins = histogram(&values, 20);
    assert_eq!(bins.len(), 20);
    let total: usize = bins.iter().map(|b| b.count).sum();
    assert_eq!(total, values.len());
    assert!(bins.last().unwrap().count > 0, "max value lands in the last bin");
}

/// All-equal data degenerates to a single bin instead of dividing by zero.
#[test]
fn histogram_degenerate_range() {
    let bins = histogram(&[5.0, 5.0, 5.0], 20);
    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].count, 3);
}
