//! Least-squares polynomial fitting used for orbit interpolation

use crate::constants::ORBIT_TIME_SCALE;
use crate::types::{SarError, SarResult};
use nalgebra::{DMatrix, DVector};

/// Relative singular value below which the design matrix counts as rank deficient
const RANK_TOLERANCE: f64 = 1e-12;

/// Centre and scale orbit times: `(t - t[n/2]) / 10`
pub fn normalize_time(time: f64, reference: f64) -> f64 {
    (time - reference) / ORBIT_TIME_SCALE
}

/// Fit `y = c0 + c1*t + ... + cd*t^d` in the least-squares sense
///
/// Returns `degree + 1` coefficients, lowest order first.
pub fn poly_fit(t: &[f64], y: &[f64], degree: usize) -> SarResult<Vec<f64>> {
    if t.len() != y.len() {
        return Err(SarError::Fit(format!(
            "polyfit: require same size vectors ({} times, {} values)",
            t.len(),
            y.len()
        )));
    }

    if let Some(i) = (0..t.len()).find(|&i| !t[i].is_finite() || !y[i].is_finite()) {
        return Err(SarError::Fit(format!(
            "polyfit: non-finite sample {} (t={}, y={})",
            i, t[i], y[i]
        )));
    }

    let num_points = t.len();
    let num_unknowns = degree + 1;
    if num_points < num_unknowns {
        return Err(SarError::Fit(format!(
            "Number of points ({}) is smaller than parameters solved for ({})",
            num_points, num_unknowns
        )));
    }

    log::debug!(
        "polyfit: degree {}, {} unknowns, {} data points",
        degree, num_unknowns, num_points
    );

    let design = DMatrix::from_fn(num_points, num_unknowns, |i, j| t[i].powi(j as i32));
    let observations = DVector::from_column_slice(y);

    let svd = design.clone().svd(true, true);
    let max_singular = svd.singular_values.max();
    let eps = max_singular * RANK_TOLERANCE;
    let rank = svd.rank(eps);
    if !(max_singular > 0.0) || rank < num_unknowns {
        return Err(SarError::Fit(format!(
            "polyfit: design matrix is rank deficient (rank {} < {})",
            rank, num_unknowns
        )));
    }

    let coefficients = svd
        .solve(&observations, eps)
        .map_err(|e| SarError::Fit(format!("polyfit: least-squares solve failed: {}", e)))?;

    let residuals = observations - &design * &coefficients;
    let max_residual = residuals.amax();
    if max_residual > crate::constants::MAX_FIT_RESIDUAL {
        log::warn!("Max. approximation error at datapoints: {:.4} m", max_residual);
    } else {
        log::debug!("Max. approximation error at datapoints: {:.3e} m", max_residual);
    }

    Ok(coefficients.iter().copied().collect())
}

/// Fit against normalized time, see [`normalize_time`]
pub fn poly_fit_normalized(t: &[f64], y: &[f64], degree: usize) -> SarResult<Vec<f64>> {
    if t.is_empty() {
        return Err(SarError::Fit("polyfit: no samples".to_string()));
    }
    let reference = t[t.len() / 2];
    let normalized: Vec<f64> = t.iter().map(|&ti| normalize_time(ti, reference)).collect();
    poly_fit(&normalized, y, degree)
}

/// Horner evaluation of `c0 + c1*x + ...`
pub fn poly_val(x: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().rev().fold(0.0, |sum, &c| sum * x + c)
}

/// First derivative `sum(i * c_i * x^(i-1))`
pub fn poly_val_derivative(x: f64, coefficients: &[f64]) -> f64 {
    coefficients
        .iter()
        .enumerate()
        .skip(1)
        .rev()
        .fold(0.0, |sum, (i, &c)| sum * x + i as f64 * c)
}

/// Second derivative `sum(i * (i-1) * c_i * x^(i-2))`
pub fn poly_val_second_derivative(x: f64, coefficients: &[f64]) -> f64 {
    coefficients
        .iter()
        .enumerate()
        .skip(2)
        .rev()
        .fold(0.0, |sum, (i, &c)| sum * x + (i * (i - 1)) as f64 * c)
}
