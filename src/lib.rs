//! Hermite interpolation and Newton root finding.
//!
//! - [`interpolation`] : Hermite interpolating polynomial in Newton form,
//!   built from a divided-difference table over doubled nodes.
//! - [`root_finding`]  : Newton–Raphson iteration with an analytic derivative.
//!
//! Both modules log through the [`log`] facade; no logger is installed here.

pub mod interpolation;
pub mod root_finding;
