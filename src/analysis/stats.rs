// ---------------------------------------------------------------------------
// Scalar descriptive statistics over f64 slices
// ---------------------------------------------------------------------------

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (ddof = 1); `None` with fewer than two values.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(var.sqrt())
}

/// Quantile with linear interpolation on a **sorted** slice
/// (the numpy/pandas default method).
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Pearson correlation coefficient of two equally long series.
/// `None` when fewer than two pairs or either series is constant.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let mx = mean(x)?;
    let my = mean(y)?;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mx;
        let dy = yi - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return None;
    }
    Some(cov / denom)
}

// ---------------------------------------------------------------------------
// Histogram with equal-width bins
// ---------------------------------------------------------------------------

/// One histogram bin over the half-open interval `[start, end)`
/// (the final bin is closed on the right).
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Partition `values` into `n_bins` equal-width bins spanning min..max.
pub fn histogram(values: &[f64], n_bins: usize) -> Vec<Bin> {
    if values.is_empty() || n_bins == 0 {
        return Vec::new();
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let width = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        (max - min) / n_bins as f64
    };

    let mut bins: Vec<Bin> = (0..n_bins)
        .map(|i| Bin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &v in values {
        let idx = (((v - min) / width) as usize).min(n_bins - 1);
        bins[idx].count += 1;
    }
    bins
}

// ---------------------------------------------------------------------------
// Gaussian kernel density estimate (the histogram's density overlay)
// ---------------------------------------------------------------------------

/// Evaluate a Gaussian KDE with Scott's-rule bandwidth on a regular grid.
///
/// The curve is scaled by `n * bin_width` so it overlays a count histogram,
/// matching the seaborn `histplot(kde=True)` presentation.
pub fn kde_curve(values: &[f64], bin_width: f64, grid_points: usize) -> Vec<[f64; 2]> {
    let n = values.len();
    if n < 2 || grid_points < 2 {
        return Vec::new();
    }
    let sd = match std_dev(values) {
        Some(s) if s > 0.0 => s,
        _ => return Vec::new(),
    };
    let bw = sd * (n as f64).powf(-0.2);

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min) - 3.0 * bw;
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max) + 3.0 * bw;
    let step = (max - min) / (grid_points - 1) as f64;

    let norm = 1.0 / (n as f64 * bw * (2.0 * std::f64::consts::PI).sqrt());
    let scale = n as f64 * bin_width;

    (0..grid_points)
        .map(|i| {
            let x = min + i as f64 * step;
            let density: f64 = values
                .iter()
                .map(|&v| (-((x - v) / bw).powi(2) / 2.0).exp())
                .sum::<f64>()
                * norm;
            [x, density * scale]
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Boxplot statistics (quartiles + 1.5 IQR whiskers)
// ---------------------------------------------------------------------------

/// Five-number summary for one boxplot box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
}

impl BoxStats {
    /// Compute box statistics from raw values.  Whiskers extend to the most
    /// extreme data points within 1.5 IQR of the box, the seaborn convention.
    pub fn from_values(values: &[f64]) -> Option<BoxStats> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile_sorted(&sorted, 0.25)?;
        let median = quantile_sorted(&sorted, 0.5)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;
        let iqr = q3 - q1;
        let lo_fence = q1 - 1.5 * iqr;
        let hi_fence = q3 + 1.5 * iqr;

        let lower_whisker = sorted
            .iter()
            .cloned()
            .find(|v| *v >= lo_fence)
            .unwrap_or(q1);
        let upper_whisker = sorted
            .iter()
            .rev()
            .cloned()
            .find(|v| *v <= hi_fence)
            .unwrap_or(q3);

        Some(BoxStats {
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_example_scores() {
        assert_eq!(mean(&[80.0, 90.0, 70.0]), Some(80.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn pearson_perfect_and_inverse() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let up = [2.0, 4.0, 6.0, 8.0];
        let down = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &up).unwrap() - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &down).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_constant_series_is_undefined() {
        let x = [1.0, 2.0, 3.0];
        let flat = [5.0, 5.0, 5.0];
        assert_eq!(pearson(&x, &flat), None);
    }

    #[test]
    fn histogram_counts_sum_to_sample_size() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let bins = histogram(&values, 20);
        assert_eq!(bins.len(), 20);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 100);
        // maximum value lands in the final bin, not past it
        assert_eq!(bins.last().unwrap().count, 5);
    }

    #[test]
    fn histogram_of_constant_values() {
        let bins = histogram(&[7.0, 7.0, 7.0], 20);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
    }

    #[test]
    fn quantile_linear_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&sorted, 0.5), Some(2.5));
        assert_eq!(quantile_sorted(&sorted, 0.0), Some(1.0));
        assert_eq!(quantile_sorted(&sorted, 1.0), Some(4.0));
    }

    #[test]
    fn box_stats_are_ordered() {
        let values: Vec<f64> = (1..=11).map(|i| i as f64).collect();
        let b = BoxStats::from_values(&values).unwrap();
        assert!(b.lower_whisker <= b.q1);
        assert!(b.q1 <= b.median);
        assert!(b.median <= b.q3);
        assert!(b.q3 <= b.upper_whisker);
        assert_eq!(b.median, 6.0);
    }

    #[test]
    fn box_whiskers_clip_outliers() {
        let mut values: Vec<f64> = (1..=11).map(|i| i as f64).collect();
        values.push(100.0); // far outside the upper fence
        let b = BoxStats::from_values(&values).unwrap();
        assert!(b.upper_whisker < 100.0);
    }

    #[test]
    fn kde_is_non_negative_and_spans_data() {
        let values: Vec<f64> = (0..50).map(|i| (i % 10) as f64).collect();
        let curve = kde_curve(&values, 0.5, 100);
        assert_eq!(curve.len(), 100);
        assert!(curve.iter().all(|p| p[1] >= 0.0));
        assert!(curve.first().unwrap()[0] < 0.0);
        assert!(curve.last().unwrap()[0] > 9.0);
    }
}
