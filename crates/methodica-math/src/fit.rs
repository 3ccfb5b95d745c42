// ─────────────────────────────────────────────────────────────────────
// Methodica — Least-Squares Curve Fitting
// Copyright (c) 2024–2026 The Methodica Developers
// License: MIT OR Apache-2.0
// ─────────────────────────────────────────────────────────────────────
//! Least-squares fitting of sampled data.
//!
//! `linear_regression` uses the closed-form normal equations for a straight
//! line; `polynomial_fit` assembles the Gram system for an arbitrary degree
//! and hands it to [`gaussian_elimination`]. Coefficients are returned in
//! ascending order of power, so `polyval` can evaluate them by Horner's
//! scheme.

use ndarray::{Array1, Array2};

use crate::elimination::gaussian_elimination;
use methodica_types::error::{MethodicaError, MethodicaResult};

/// Least-squares straight line through the samples, as `(intercept, slope)`.
///
/// # Panics
///
/// Panics if the sample lists differ in length or hold fewer than two
/// samples.
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> (f64, f64) {
    assert_eq!(
        xs.len(),
        ys.len(),
        "Sample lists must have matching lengths"
    );
    assert!(xs.len() >= 2, "Linear regression needs at least two samples");

    let n = xs.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let mean_x = sum_x / n;
    let mean_y = sum_y / n;
    let denom = sum_xx - n * mean_x * mean_x;
    let intercept = (mean_y * sum_xx - mean_x * sum_xy) / denom;
    let slope = (sum_xy - mean_x * sum_y) / denom;
    (intercept, slope)
}

/// Least-squares polynomial of the given degree through the samples.
///
/// Coefficients come back in ascending order: `coeffs[k]` multiplies `x^k`.
/// Determining `degree + 1` coefficients needs at least that many samples;
/// fewer yields [`MethodicaError::InsufficientData`].
///
/// # Panics
///
/// Panics if the sample lists differ in length.
pub fn polynomial_fit(xs: &[f64], ys: &[f64], degree: usize) -> MethodicaResult<Vec<f64>> {
    assert_eq!(
        xs.len(),
        ys.len(),
        "Sample lists must have matching lengths"
    );
    let order = degree + 1;
    if xs.len() < order {
        return Err(MethodicaError::InsufficientData {
            needed: order,
            got: xs.len(),
        });
    }

    let mut gram = Array2::<f64>::zeros((order, order));
    let mut rhs = Array1::<f64>::zeros(order);
    for row in 0..order {
        for col in 0..order {
            gram[[row, col]] = xs.iter().map(|&x| x.powi((row + col) as i32)).sum();
        }
        rhs[row] = xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| x.powi(row as i32) * y)
            .sum();
    }

    let coeffs = gaussian_elimination(&gram, &rhs)?;
    Ok(coeffs.to_vec())
}

/// Evaluates a polynomial in ascending coefficient order by Horner's scheme.
#[inline]
pub fn polyval(coeffs: &[f64], x: f64) -> f64 {
    let mut acc = 0.0;
    for &c in coeffs.iter().rev() {
        acc = acc * x + c;
    }
    acc
}
