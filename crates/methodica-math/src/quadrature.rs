// ─────────────────────────────────────────────────────────────────────
// Methodica — Quadrature
// Copyright (c) 2024–2026 The Methodica Developers
// License: MIT OR Apache-2.0
// ─────────────────────────────────────────────────────────────────────
//! Composite Newton-Cotes quadrature over uniform subdivisions.
//!
//! All rules evaluate the integrand at `n + 1` equally spaced nodes on
//! `[lower, upper]` and return the raw weighted sum. Simpson's 1/3 rule
//! needs an even subinterval count, the 3/8 rule a multiple of three; the
//! double integral applies the 1/3 weights along both axes of a rectangle.

fn check_interval(lower: f64, upper: f64, n: usize) {
    assert!(n > 0, "Subinterval count must be > 0");
    assert!(lower < upper, "Lower bound must be below upper bound");
}

/// Composite trapezoid rule over `n` subintervals.
///
/// # Panics
///
/// Panics if `n == 0` or the bounds are not increasing.
pub fn trapezoid<F: Fn(f64) -> f64>(f: F, lower: f64, upper: f64, n: usize) -> f64 {
    check_interval(lower, upper, n);
    let h = (upper - lower) / n as f64;
    let mut sum = (f(lower) + f(upper)) / 2.0;
    for i in 1..n {
        sum += f(lower + i as f64 * h);
    }
    h * sum
}

/// Composite Simpson 1/3 rule over `n` subintervals.
///
/// Interior nodes alternate weights 4 and 2; exact for cubics.
///
/// # Panics
///
/// Panics if `n` is zero or odd, or the bounds are not increasing.
pub fn simpson_one_third<F: Fn(f64) -> f64>(f: F, lower: f64, upper: f64, n: usize) -> f64 {
    check_interval(lower, upper, n);
    assert!(n % 2 == 0, "Simpson 1/3 needs an even subinterval count");

    let h = (upper - lower) / n as f64;
    let mut sum = f(lower) + f(upper);
    for i in 1..n {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * f(lower + i as f64 * h);
    }
    h / 3.0 * sum
}

/// Composite Simpson 3/8 rule over `n` subintervals.
///
/// Interior nodes carry weight 3 except at every third node, which carries
/// weight 2.
///
/// # Panics
///
/// Panics if `n` is zero or not a multiple of three, or the bounds are not
/// increasing.
pub fn simpson_three_eighth<F: Fn(f64) -> f64>(f: F, lower: f64, upper: f64, n: usize) -> f64 {
    check_interval(lower, upper, n);
    assert!(n % 3 == 0, "Simpson 3/8 needs a multiple of 3 subintervals");

    let h = (upper - lower) / n as f64;
    let mut sum = f(lower) + f(upper);
    for i in 1..n {
        let weight = if i % 3 == 0 { 2.0 } else { 3.0 };
        sum += weight * f(lower + i as f64 * h);
    }
    3.0 * h / 8.0 * sum
}

/// Double integral of `f(x, y)` over a rectangle by iterated Simpson 1/3.
///
/// The inner rule runs along `y` at every outer node, then the outer 1/3
/// weights combine the slices along `x`.
///
/// # Panics
///
/// Panics if either subinterval count is zero or odd, or either bound pair
/// is not increasing.
pub fn simpson_double<F: Fn(f64, f64) -> f64>(
    f: F,
    x_lower: f64,
    x_upper: f64,
    nx: usize,
    y_lower: f64,
    y_upper: f64,
    ny: usize,
) -> f64 {
    check_interval(x_lower, x_upper, nx);
    check_interval(y_lower, y_upper, ny);
    assert!(nx % 2 == 0, "Simpson 1/3 needs an even subinterval count");
    assert!(ny % 2 == 0, "Simpson 1/3 needs an even subinterval count");

    let hx = (x_upper - x_lower) / nx as f64;
    let slice = |x: f64| simpson_one_third(|y| f(x, y), y_lower, y_upper, ny);

    let mut sum = slice(x_lower) + slice(x_upper);
    for i in 1..nx {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * slice(x_lower + i as f64 * hx);
    }
    hx / 3.0 * sum
}

// ═══════════════════════════════ tests ═══════════════════════════════
