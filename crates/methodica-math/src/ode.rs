//! Single-step integrators for first-order initial value problems.
//!
//! Each routine marches `dy/dx = f(x, y)` from `(x0, y0)` with a fixed
//! step `h` and returns the full trajectory, initial point included. The
//! step count is `(x_end - x0) / h` truncated toward zero, so a span that
//! is not an exact multiple of `h` stops short of `x_end` rather than
//! overshooting it.

fn step_count(x0: f64, x_end: f64, h: f64) -> usize {
    assert!(h > 0.0, "Step size must be > 0");
    assert!(x_end >= x0, "Integration interval must not be reversed");
    ((x_end - x0) / h) as usize
}

/// Explicit Euler: first-order accurate, one slope evaluation per step.
///
/// # Panics
///
/// Panics if `h <= 0` or `x_end < x0`.
pub fn euler<F: Fn(f64, f64) -> f64>(f: F, x0: f64, y0: f64, x_end: f64, h: f64) -> Vec<(f64, f64)> {
    let steps = step_count(x0, x_end, h);
    let mut x = x0;
    let mut y = y0;
    let mut trajectory = Vec::with_capacity(steps + 1);
    trajectory.push((x, y));
    for _ in 0..steps {
        y += h * f(x, y);
        x += h;
        trajectory.push((x, y));
    }
    trajectory
}

/// Heun's method: trial Euler step, then the trapezoid average of the two
/// slopes. Second-order accurate.
///
/// # Panics
///
/// Panics if `h <= 0` or `x_end < x0`.
pub fn heun<F: Fn(f64, f64) -> f64>(f: F, x0: f64, y0: f64, x_end: f64, h: f64) -> Vec<(f64, f64)> {
    let steps = step_count(x0, x_end, h);
    let mut x = x0;
    let mut y = y0;
    let mut trajectory = Vec::with_capacity(steps + 1);
    trajectory.push((x, y));
    for _ in 0..steps {
        let k1 = f(x, y);
        let k2 = f(x + h, y + h * k1);
        y += h / 2.0 * (k1 + k2);
        x += h;
        trajectory.push((x, y));
    }
    trajectory
}

/// Classical fourth-order Runge-Kutta.
///
/// # Panics
///
/// Panics if `h <= 0` or `x_end < x0`.
pub fn runge_kutta4<F: Fn(f64, f64) -> f64>(
    f: F,
    x0: f64,
    y0: f64,
    x_end: f64,
    h: f64,
) -> Vec<(f64, f64)> {
    let steps = step_count(x0, x_end, h);
    let mut x = x0;
    let mut y = y0;
    let mut trajectory = Vec::with_capacity(steps + 1);
    trajectory.push((x, y));
    for _ in 0..steps {
        let k1 = f(x, y);
        let k2 = f(x + h / 2.0, y + h / 2.0 * k1);
        let k3 = f(x + h / 2.0, y + h / 2.0 * k2);
        let k4 = f(x + h, y + h * k3);
        y += h / 6.0 * (k1 + 2.0 * k2 + 2.0 * k3 + k4);
        x += h;
        trajectory.push((x, y));
    }
    trajectory
}
