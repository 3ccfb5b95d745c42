//! Polynomial and piecewise-linear interpolation of sampled data.
//!
//! `xs` must be strictly increasing for the piecewise-linear rule; the
//! polynomial rules only need distinct abscissae. Lagrange and Newton build
//! the same degree `n - 1` polynomial through all `n` samples and differ
//! only in evaluation scheme.

use ndarray::Array2;

fn check_samples(xs: &[f64], ys: &[f64]) {
    assert_eq!(
        xs.len(),
        ys.len(),
        "Sample lists must have matching lengths"
    );
    assert!(xs.len() >= 2, "Interpolation needs at least two samples");
}

/// Piecewise-linear interpolation between the two samples bracketing `x`.
///
/// Below `xs[0]` the first segment is extended; at or beyond the last
/// sample there is no bracketing segment and `None` is returned.
///
/// # Panics
///
/// Panics if the sample lists differ in length or hold fewer than two
/// samples.
pub fn linear_interpolate(xs: &[f64], ys: &[f64], x: f64) -> Option<f64> {
    check_samples(xs, ys);
    for i in 1..xs.len() {
        if x < xs[i] {
            let slope = (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
            return Some(ys[i - 1] + slope * (x - xs[i - 1]));
        }
    }
    None
}

/// Evaluates the Lagrange form of the interpolating polynomial at `x`.
///
/// # Panics
///
/// Panics if the sample lists differ in length or hold fewer than two
/// samples.
pub fn lagrange_interpolate(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    check_samples(xs, ys);
    let n = xs.len();
    let mut total = 0.0;
    for i in 0..n {
        let mut term = ys[i];
        for j in 0..n {
            if j != i {
                term *= (x - xs[j]) / (xs[i] - xs[j]);
            }
        }
        total += term;
    }
    total
}

/// Evaluates the Newton form of the interpolating polynomial at `x`.
///
/// Builds a divided-difference table whose diagonal holds the Newton
/// coefficients, then accumulates `d[k][k] * prod(x - xs[m])` for `m < k`.
///
/// # Panics
///
/// Panics if the sample lists differ in length or hold fewer than two
/// samples.
pub fn newton_interpolate(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    check_samples(xs, ys);
    let n = xs.len();

    let mut table = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        table[[i, 0]] = ys[i];
    }
    for j in 0..n - 1 {
        for i in j + 1..n {
            table[[i, j + 1]] = (table[[i, j]] - table[[j, j]]) / (xs[i] - xs[j]);
        }
    }

    let mut total = 0.0;
    for k in 0..n {
        let mut product = 1.0;
        for m in 0..k {
            product *= x - xs[m];
        }
        total += table[[k, k]] * product;
    }
    total
}
