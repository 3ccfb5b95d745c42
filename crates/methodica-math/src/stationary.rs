// ─────────────────────────────────────────────────────────────────────
// Methodica — Stationary Solvers
// Copyright (c) 2024–2026 The Methodica Developers
// License: MIT OR Apache-2.0
// ─────────────────────────────────────────────────────────────────────
//! Jacobi and Gauss-Seidel iteration for dense linear systems.
//!
//! Both solvers sweep from an initial guess until the movement between
//! iterates falls below the control threshold or the iteration budget runs
//! out. Running out of budget is not an error: the outcome carries the best
//! iterate together with a count of `max_iter - 1`, which callers compare
//! against to detect non-convergence.
//!
//! Neither solver inspects the diagonal. A zero diagonal entry divides the
//! sweep by zero, and the resulting NaN or infinity is returned in the
//! solution for the caller to see.

use log::debug;
use methodica_types::control::IterControl;
use methodica_types::trace::{IterationSink, NullSink};
use ndarray::{Array1, Array2};

// ───────────────────────────── outcome ───────────────────────────────

/// Result of a stationary iterative solve.
#[derive(Debug, Clone)]
pub struct StationaryOutcome {
    /// Completed sweeps. Equal to `max_iter - 1` when the budget was
    /// exhausted without meeting the threshold.
    pub iterations: usize,
    /// Final iterate, rounded to the control's reporting precision.
    pub solution: Array1<f64>,
}

// ───────────────────────────── solvers ───────────────────────────────

/// Jacobi (simultaneous displacement) iteration from `x0`.
///
/// Each sweep computes every component from the previous iterate. The
/// sweep converges when all components move by less than the control
/// threshold.
///
/// # Panics
///
/// Panics if `a` is not square or if `b` and `x0` do not match its size.
pub fn jacobi(
    a: &Array2<f64>,
    b: &Array1<f64>,
    x0: &Array1<f64>,
    control: &IterControl,
) -> StationaryOutcome {
    jacobi_traced(a, b, x0, control, &mut NullSink)
}

/// Jacobi iteration reporting each completed sweep to `sink`.
pub fn jacobi_traced<S: IterationSink>(
    a: &Array2<f64>,
    b: &Array1<f64>,
    x0: &Array1<f64>,
    control: &IterControl,
    sink: &mut S,
) -> StationaryOutcome {
    let n = check_system(a, b, x0);
    let threshold = control.threshold();

    let mut x: Vec<f64> = x0.to_vec();
    let mut iterations = 0;
    for iteration in 1..control.max_iter {
        iterations = iteration;
        let mut x_new = vec![0.0; n];
        for i in 0..n {
            let mut sum = b[i];
            for j in 0..n {
                if j != i {
                    sum -= a[[i, j]] * x[j];
                }
            }
            x_new[i] = sum / a[[i, i]];
        }
        let converged = (0..n).all(|i| (x_new[i] - x[i]).abs() < threshold);
        sink.record(iteration, &x_new);
        debug!("jacobi sweep {}: {:?}", iteration, x_new);
        x = x_new;
        if converged {
            break;
        }
    }

    finish(x, iterations, control)
}

/// Gauss-Seidel (successive displacement) iteration from `x0`.
///
/// Each component is updated in place, immediately using components already
/// updated in the current sweep. Convergence is judged on the movement of
/// the last component only; earlier components are not checked. Callers
/// needing a stricter criterion can watch the full iterate through
/// [`gauss_seidel_traced`].
///
/// # Panics
///
/// Panics if `a` is not square or if `b` and `x0` do not match its size.
pub fn gauss_seidel(
    a: &Array2<f64>,
    b: &Array1<f64>,
    x0: &Array1<f64>,
    control: &IterControl,
) -> StationaryOutcome {
    gauss_seidel_traced(a, b, x0, control, &mut NullSink)
}

/// Gauss-Seidel iteration reporting each completed sweep to `sink`.
pub fn gauss_seidel_traced<S: IterationSink>(
    a: &Array2<f64>,
    b: &Array1<f64>,
    x0: &Array1<f64>,
    control: &IterControl,
    sink: &mut S,
) -> StationaryOutcome {
    let n = check_system(a, b, x0);
    let threshold = control.threshold();

    let mut x: Vec<f64> = x0.to_vec();
    let mut iterations = 0;
    for iteration in 1..control.max_iter {
        iterations = iteration;
        let previous_last = x[n - 1];
        for i in 0..n {
            let mut sum = b[i];
            for j in 0..n {
                if j != i {
                    sum -= a[[i, j]] * x[j];
                }
            }
            x[i] = sum / a[[i, i]];
        }
        sink.record(iteration, &x);
        debug!("gauss-seidel sweep {}: {:?}", iteration, x);
        if (x[n - 1] - previous_last).abs() < threshold {
            break;
        }
    }

    finish(x, iterations, control)
}

// ───────────────────────────── helpers ───────────────────────────────

fn check_system(a: &Array2<f64>, b: &Array1<f64>, x0: &Array1<f64>) -> usize {
    let n = b.len();
    assert!(n > 0, "System size must be > 0");
    assert_eq!(a.nrows(), n, "Coefficient matrix rows must match rhs length");
    assert_eq!(a.ncols(), n, "Coefficient matrix must be square");
    assert_eq!(x0.len(), n, "Initial guess length must match rhs length");
    n
}

fn finish(x: Vec<f64>, iterations: usize, control: &IterControl) -> StationaryOutcome {
    StationaryOutcome {
        iterations,
        solution: Array1::from(x).mapv(|v| control.round(v)),
    }
}

// ═══════════════════════════════ tests ═══════════════════════════════
