//! Classical numerical methods: direct and stationary linear solvers,
//! scalar root finding, finite-difference derivatives, quadrature,
//! interpolation, least squares, and explicit ODE steppers.

pub mod elimination;
pub mod finite_diff;
pub mod fit;
pub mod interp;
pub mod ode;
pub mod quadrature;
pub mod roots;
pub mod stationary;
