//! Scalar root finding: bracketing, secant-based, and fixed-point methods.
//!
//! Every routine returns `(iterations, root)` with the root rounded to the
//! control's reporting precision. Running out of budget is not an error:
//! the count comes back as `max_iter - 1` and the root is the best
//! candidate found so far.

use log::debug;
use methodica_types::control::IterControl;
use methodica_types::trace::{IterationSink, NullSink};

/// Bisection on a sign-changing bracket `[x1, x2]`.
///
/// An endpoint that is already an exact root short-circuits with an
/// iteration count of zero. Otherwise the bracket halves until the value at
/// the left endpoint falls below the threshold; the left endpoint is the
/// reported root.
///
/// # Panics
///
/// Panics unless `f(x1)` and `f(x2)` have opposite signs.
pub fn bisection<F: Fn(f64) -> f64>(f: F, x1: f64, x2: f64, control: &IterControl) -> (usize, f64) {
    let y1 = f(x1);
    let y2 = f(x2);
    if y1 == 0.0 {
        return (0, control.round(x1));
    }
    if y2 == 0.0 {
        return (0, control.round(x2));
    }
    assert!(y1 * y2 < 0.0, "Bracket endpoints must have opposite signs");

    let threshold = control.threshold();
    let mut x1 = x1;
    let mut x2 = x2;
    let mut iterations = 0;
    for iteration in 1..control.max_iter {
        iterations = iteration;
        let xh = (x1 + x2) / 2.0;
        let yh = f(xh);
        let y1 = f(x1);
        if y1.abs() < threshold {
            break;
        }
        if y1 * yh < 0.0 {
            x2 = xh;
        } else {
            x1 = xh;
        }
    }
    (iterations, control.round(x1))
}

/// Regula falsi (false position) on a sign-changing bracket `[x1, x2]`.
///
/// The secant through the bracket endpoints supplies each candidate; the
/// endpoint whose value shares the candidate's sign is replaced, so the
/// bracket always straddles the root.
///
/// # Panics
///
/// Panics unless the endpoint values have opposite signs. Endpoints whose
/// value is already below the threshold short-circuit first.
pub fn regula_falsi<F: Fn(f64) -> f64>(
    f: F,
    x1: f64,
    x2: f64,
    control: &IterControl,
) -> (usize, f64) {
    let threshold = control.threshold();
    let mut y1 = f(x1);
    let mut y2 = f(x2);
    if y1.abs() < threshold {
        return (0, control.round(x1));
    }
    if y2.abs() < threshold {
        return (0, control.round(x2));
    }
    assert!(y1 * y2 < 0.0, "Bracket endpoints must have opposite signs");

    let mut x1 = x1;
    let mut x2 = x2;
    let mut xh = x2;
    let mut iterations = 0;
    for iteration in 1..control.max_iter {
        iterations = iteration;
        xh = x2 - (x2 - x1) / (y2 - y1) * y2;
        let yh = f(xh);
        if yh.abs() < threshold {
            break;
        }
        if y1 * yh < 0.0 {
            x2 = xh;
            y2 = yh;
        } else {
            x1 = xh;
            y1 = yh;
        }
    }
    (iterations, control.round(xh))
}

/// Secant method from two starting points, no bracketing required.
///
/// Starting points whose value is already below the threshold short-circuit
/// with zero iterations. Divergent starting points simply exhaust the
/// budget; the caller sees `max_iter - 1` iterations and the last candidate.
pub fn secant<F: Fn(f64) -> f64>(f: F, x1: f64, x2: f64, control: &IterControl) -> (usize, f64) {
    let threshold = control.threshold();
    if f(x1).abs() < threshold {
        return (0, control.round(x1));
    }
    if f(x2).abs() < threshold {
        return (0, control.round(x2));
    }
    let mut x1 = x1;
    let mut x2 = x2;
    let mut x_new = x2;
    let mut iterations = 0;
    for iteration in 1..control.max_iter {
        iterations = iteration;
        let y1 = f(x1);
        let y2 = f(x2);
        x_new = x2 - (x2 - x1) / (y2 - y1) * y2;
        if f(x_new).abs() < threshold {
            break;
        }
        x1 = x2;
        x2 = x_new;
    }
    (iterations, control.round(x_new))
}

/// Newton-Raphson iteration from `x0` with an explicit derivative.
///
/// Convergence is judged on the step size: the loop stops once successive
/// candidates move by less than the threshold.
pub fn newton_raphson<F, D>(f: F, df: D, x0: f64, control: &IterControl) -> (usize, f64)
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    newton_raphson_traced(f, df, x0, control, &mut NullSink)
}

/// Newton-Raphson reporting each candidate to `sink`.
pub fn newton_raphson_traced<F, D, S>(
    f: F,
    df: D,
    x0: f64,
    control: &IterControl,
    sink: &mut S,
) -> (usize, f64)
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    S: IterationSink,
{
    let threshold = control.threshold();
    let mut x = x0;
    let mut x_new = x0;
    let mut iterations = 0;
    for iteration in 1..control.max_iter {
        iterations = iteration;
        x_new = x - f(x) / df(x);
        sink.record(iteration, &[x_new]);
        debug!("newton-raphson iter {}: {}", iteration, x_new);
        if (x_new - x).abs() < threshold {
            break;
        }
        x = x_new;
    }
    (iterations, control.round(x_new))
}

/// Fixed-point iteration `x := g(x)` from `x0`.
///
/// Converges when `|g'| < 1` near the root; otherwise the budget runs out
/// and the last candidate is returned.
pub fn fixed_point<G: Fn(f64) -> f64>(g: G, x0: f64, control: &IterControl) -> (usize, f64) {
    fixed_point_traced(g, x0, control, &mut NullSink)
}

/// Fixed-point iteration reporting each candidate to `sink`.
pub fn fixed_point_traced<G, S>(g: G, x0: f64, control: &IterControl, sink: &mut S) -> (usize, f64)
where
    G: Fn(f64) -> f64,
    S: IterationSink,
{
    let threshold = control.threshold();
    let mut x = x0;
    let mut x_new = x0;
    let mut iterations = 0;
    for iteration in 1..control.max_iter {
        iterations = iteration;
        x_new = g(x);
        sink.record(iteration, &[x_new]);
        debug!("fixed-point iter {}: {}", iteration, x_new);
        if (x_new - x).abs() < threshold {
            break;
        }
        x = x_new;
    }
    (iterations, control.round(x_new))
}
