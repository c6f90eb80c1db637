//! Numeric helpers shared by the transformer, the reporter, and the dashboard.
//!
//! Conventions match the warehouse's established summary semantics:
//!   - std is the sample standard deviation (ddof = 1), 0.0 for n < 2
//!   - quantiles interpolate linearly between order statistics
//!   - median is the 0.5 quantile (midpoint of the two central values
//!     for even n)

/// Arithmetic mean. Returns None for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (ddof = 1). 0.0 when fewer than two values.
pub fn std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = values.iter().sum::<f64>() / n as f64;
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (n - 1) as f64;
    var.sqrt()
}

/// Linearly interpolated quantile, q in [0, 1]. None for an empty slice.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = pos - lo as f64;
    Some(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Median, i.e. the 0.5 quantile.
pub fn median(values: &[f64]) -> Option<f64> {
    quantile(values, 0.5)
}

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl Describe {
    /// Compute the eight summary statistics. None for an empty column.
    pub fn of(values: &[f64]) -> Option<Self> {
        let mean = mean(values)?;
        Some(Self {
            count: values.len(),
            mean,
            std: std_dev(values),
            min: values.iter().cloned().fold(f64::INFINITY, f64::min),
            q25: quantile(values, 0.25)?,
            q50: quantile(values, 0.50)?,
            q75: quantile(values, 0.75)?,
            max: values.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        })
    }
}

/// One histogram bin: inclusive lower edge and count.
/// The last bin's upper edge is inclusive so the maximum lands in-range.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Equal-width histogram over the data's own [min, max] range.
/// Empty input or zero bins yields an empty vec; a degenerate range
/// (all values equal) puts everything in a single bin.
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max <= min {
        return vec![Bin { lo: min, hi: max, count: values.len() }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            lo: min + i as f64 * width,
            hi: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}
