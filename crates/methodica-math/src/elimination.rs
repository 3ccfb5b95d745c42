// ─────────────────────────────────────────────────────────────────────
// Methodica — Elimination
// Copyright (c) 2024–2026 The Methodica Developers
// License: MIT OR Apache-2.0
// ─────────────────────────────────────────────────────────────────────
//! Direct solution of dense linear systems by Gaussian elimination.
//!
//! Pivoting is adjacent-row exchange only: a zero pivot is repaired by
//! swapping the pivot row with the row directly below it, and the solve
//! fails if the entry is still zero afterwards. There is no magnitude-based
//! pivot selection, so near-zero pivots are used as-is.

use methodica_types::error::{MethodicaError, MethodicaResult};
use ndarray::{Array1, Array2};

/// Solve the dense system `A x = b` by Gaussian elimination with adjacent
/// row exchange and back substitution.
///
/// Both inputs are copied on entry; the caller's data is never modified.
/// Elimination of `row` under pivot `k` applies the scaled update
/// `row := pivot_row - (A[k,k] / A[row,k]) * row` across columns `k..n`,
/// skipping rows whose leading entry is already zero.
///
/// # Errors
///
/// [`MethodicaError::SingularPivot`] when a pivot is zero and the exchange
/// with the next row leaves it zero. [`MethodicaError::SingularDiagonal`]
/// when the final diagonal entry is zero at back substitution.
///
/// # Panics
///
/// Panics if `a` is not square, if `b`'s length does not match it, or if
/// the system is empty.
pub fn gaussian_elimination(a: &Array2<f64>, b: &Array1<f64>) -> MethodicaResult<Array1<f64>> {
    let n = b.len();
    assert!(n > 0, "System size must be > 0");
    assert_eq!(a.nrows(), n, "Coefficient matrix rows must match rhs length");
    assert_eq!(a.ncols(), n, "Coefficient matrix must be square");

    let mut a = a.clone();
    let mut b = b.clone();

    for k in 0..n - 1 {
        if a[[k, k]] == 0.0 {
            swap_adjacent_rows(&mut a, &mut b, k);
            if a[[k, k]] == 0.0 {
                return Err(MethodicaError::SingularPivot { column: k });
            }
        }
        for row in k + 1..n {
            if a[[row, k]] == 0.0 {
                continue;
            }
            let factor = a[[k, k]] / a[[row, k]];
            for col in k..n {
                a[[row, col]] = a[[k, col]] - factor * a[[row, col]];
            }
            b[row] = b[k] - factor * b[row];
        }
    }

    back_substitute(&a, &b)
}

/// Swap row `k` with row `k + 1` in the matrix and the right-hand side.
fn swap_adjacent_rows(a: &mut Array2<f64>, b: &mut Array1<f64>, k: usize) {
    for col in 0..a.ncols() {
        let held = a[[k, col]];
        a[[k, col]] = a[[k + 1, col]];
        a[[k + 1, col]] = held;
    }
    b.swap(k, k + 1);
}

/// Back substitution on the upper triangular system left by elimination.
///
/// The pivot loop guarantees nonzero diagonals above the last row, so only
/// `a[[n-1, n-1]]` needs an explicit check.
fn back_substitute(a: &Array2<f64>, b: &Array1<f64>) -> MethodicaResult<Array1<f64>> {
    let n = b.len();
    if a[[n - 1, n - 1]] == 0.0 {
        return Err(MethodicaError::SingularDiagonal { row: n - 1 });
    }

    let mut x = Array1::zeros(n);
    x[n - 1] = b[n - 1] / a[[n - 1, n - 1]];
    for row in (0..n - 1).rev() {
        let mut sum = b[row];
        for col in row + 1..n {
            sum -= a[[row, col]] * x[col];
        }
        x[row] = sum / a[[row, row]];
    }
    Ok(x)
}
