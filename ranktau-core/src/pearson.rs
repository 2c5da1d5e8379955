//! Pearson's correlation coefficient over two rankings, treating ranks as
//! plain numbers. With permutation inputs this is Spearman's rho.
use crate::error::CorrelationError;
use crate::types::check_comparable;

/// Pearson's r between `x` and `y`.
///
/// Two passes: means first, then centered sums
/// `Σ(x−x̄)(y−ȳ) / sqrt(Σ(x−x̄)² · Σ(y−ȳ)²)`. Centering keeps large rank
/// values (~1e9) from cancelling out. A constant input has zero spread and
/// yields [`CorrelationError::ZeroVariance`] instead of NaN.
pub fn pearson(x: &[i64], y: &[i64]) -> Result<f64, CorrelationError> {
    let n = check_comparable(x, y)? as f64;

    let mean_x = x.iter().map(|&v| v as f64).sum::<f64>() / n;
    let mean_y = y.iter().map(|&v| v as f64).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut ss_x = 0.0;
    let mut ss_y = 0.0;

    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi as f64 - mean_x;
        let dy = yi as f64 - mean_y;
        cov += dx * dy;
        ss_x += dx * dx;
        ss_y += dy * dy;
    }

    if ss_x == 0.0 || ss_y == 0.0 {
        return Err(CorrelationError::ZeroVariance);
    }

    Ok(cov / (ss_x * ss_y).sqrt())
}
