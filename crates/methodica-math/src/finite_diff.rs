//! Finite-difference derivatives of arbitrary order.
//!
//! The order-`n` forward, backward, and central stencils weight function
//! samples by the rows of Pascal's triangle with alternating signs. Central
//! differences of odd order sample at half-spacing offsets; nothing is
//! rounded, the raw weighted sum over `h^n` is returned.

/// Binomial coefficient `C(n, i)` as a float.
fn n_choose_i(n: u32, i: u32) -> f64 {
    factorial(n) / (factorial(n - i) * factorial(i))
}

fn factorial(k: u32) -> f64 {
    let mut acc = 1.0;
    for v in 2..=k {
        acc *= v as f64;
    }
    acc
}

fn parity_sign(k: u32) -> f64 {
    if k % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

fn check_stencil(n: u32, h: f64) {
    assert!(n > 0, "Derivative order must be > 0");
    assert!(h > 0.0, "Sample spacing must be > 0");
}

/// Order-`n` forward difference of `f` at `x` with spacing `h`.
///
/// Samples at `x, x + h, ..., x + n h`.
///
/// # Panics
///
/// Panics if `n == 0` or `h` is not positive.
pub fn forward_difference<F: Fn(f64) -> f64>(f: F, x: f64, n: u32, h: f64) -> f64 {
    check_stencil(n, h);
    let mut sum = 0.0;
    for i in 0..=n {
        sum += parity_sign(n - i) * n_choose_i(n, i) * f(x + i as f64 * h);
    }
    sum / h.powi(n as i32)
}

/// Order-`n` backward difference of `f` at `x` with spacing `h`.
///
/// Samples at `x, x - h, ..., x - n h`.
///
/// # Panics
///
/// Panics if `n == 0` or `h` is not positive.
pub fn backward_difference<F: Fn(f64) -> f64>(f: F, x: f64, n: u32, h: f64) -> f64 {
    check_stencil(n, h);
    let mut sum = 0.0;
    for i in 0..=n {
        sum += parity_sign(i) * n_choose_i(n, i) * f(x - i as f64 * h);
    }
    sum / h.powi(n as i32)
}

/// Order-`n` central difference of `f` at `x` with spacing `h`.
///
/// Samples at `x + (n/2 - i) h` for `i` in `0..=n`, with `n/2` taken in
/// real arithmetic, so odd orders evaluate midway between grid points.
///
/// # Panics
///
/// Panics if `n == 0` or `h` is not positive.
pub fn central_difference<F: Fn(f64) -> f64>(f: F, x: f64, n: u32, h: f64) -> f64 {
    check_stencil(n, h);
    let mut sum = 0.0;
    for i in 0..=n {
        sum += parity_sign(i) * n_choose_i(n, i) * f(x + (n as f64 / 2.0 - i as f64) * h);
    }
    sum / h.powi(n as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use methodica_types::control::round_to;

    // f(x) = 0.1 x^5 - 0.2 x^3 + 0.1 x - 0.2
    fn quintic(x: f64) -> f64 {
        0.1 * x.powi(5) - 0.2 * x.powi(3) + 0.1 * x - 0.2
    }

    const X: f64 = 0.1;
    const H: f64 = 0.05;

    #[test]
    fn test_forward_reference_values() {
        let first = forward_difference(quintic, X, 1, H);
        let second = forward_difference(quintic, X, 2, H);
        assert!((round_to(first, 6) - 0.090632).abs() < 1e-12, "d1 = {first}");
        assert!((round_to(second, 6) + 0.172875).abs() < 1e-12, "d2 = {second}");
    }

    #[test]
    fn test_backward_reference_values() {
        let first = backward_difference(quintic, X, 1, H);
        let second = backward_difference(quintic, X, 2, H);
        assert!((round_to(first, 6) - 0.096519).abs() < 1e-12, "d1 = {first}");
        assert!((round_to(second, 6) + 0.059625).abs() < 1e-12, "d2 = {second}");
    }

    #[test]
    fn test_central_reference_values() {
        let first = central_difference(quintic, X, 1, H);
        let second = central_difference(quintic, X, 2, H);
        assert!((round_to(first, 6) - 0.093931).abs() < 1e-12, "d1 = {first}");
        assert!((round_to(second, 6) + 0.117750).abs() < 1e-12, "d2 = {second}");
    }

    #[test]
    fn test_central_is_closest_to_analytic() {
        // f'(x) = 0.5 x^4 - 0.6 x^2 + 0.1
        let analytic = 0.5 * X.powi(4) - 0.6 * X.powi(2) + 0.1;
        let forward = (forward_difference(quintic, X, 1, H) - analytic).abs();
        let backward = (backward_difference(quintic, X, 1, H) - analytic).abs();
        let central = (central_difference(quintic, X, 1, H) - analytic).abs();
        assert!(
            central < forward && central < backward,
            "central error {central} should beat forward {forward} and backward {backward}"
        );
    }

    #[test]
    fn test_first_order_converges_on_refinement() {
        let analytic = 1.0f64.cos();
        let coarse = (central_difference(f64::sin, 1.0, 1, 1e-2) - analytic).abs();
        let fine = (central_difference(f64::sin, 1.0, 1, 1e-4) - analytic).abs();
        assert!(fine < coarse, "refinement should help: {coarse} -> {fine}");
        assert!(fine < 1e-8, "central at h=1e-4 should be accurate: {fine}");
    }

    #[test]
    fn test_second_order_exact_for_parabola() {
        let second = central_difference(|x| x * x, 3.0, 2, 0.5);
        assert!((second - 2.0).abs() < 1e-12, "d2 of x^2 = {second}");
    }

    #[test]
    #[should_panic(expected = "order must be > 0")]
    fn test_rejects_zeroth_order() {
        let _ = forward_difference(f64::sin, 1.0, 0, 0.1);
    }

    #[test]
    #[should_panic(expected = "spacing must be > 0")]
    fn test_rejects_nonpositive_spacing() {
        let _ = central_difference(f64::sin, 1.0, 1, 0.0);
    }
}
