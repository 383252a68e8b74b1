//! Small numeric helpers shared by the scoring variants.

/// Round to `places` decimal places.
///
/// Rounds the exact binary value, ties to even, so `42.149999...` stays
/// `42.1` and `70.25` becomes `70.2`. Scaling by `10^places` first would
/// round twice.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // `+ 0.0` turns a negative zero into a positive one.
    format!("{value:.places$}")
        .parse::<f64>()
        .map_or(value, |rounded| rounded + 0.0)
}

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Pearson correlation coefficient between `xs` and `ys`.
///
/// Pairs beyond the shorter slice are ignored. When either series has zero
/// variance the denominator is taken as 1.0, so the result degenerates to
/// 0.0 instead of being undefined. Empty input also yields 0.0.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return 0.0;
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);
    let (mean_x, mean_y) = (mean(xs), mean(ys));

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    let denominator = if denominator == 0.0 { 1.0 } else { denominator };
    covariance / denominator
}
