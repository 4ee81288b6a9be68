//! Shared configuration for interpolation algorithms.
//!
//! Provides [`CommonCfg`] with default minimum allowed spacing between adjacent
//! `x` data; [`DEFAULT_X_TOL`].
//!
//! [`CommonCfg`] — universal fields
//! - `x`      : x values provided (nodes)
//! - `y`      : y values provided
//! - `dy`     : first-derivative values provided at each node
//! - `x_eval` : x values to evaluate
//! - `x_min_spacing` : minimum allowed gap between adjacent nodes
//!
//! [`CommonCfg::new`] initializes configuration with empty slices.


use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) dy     : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_min_spacing: f64,
}

impl<'a> Default for CommonCfg<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            dy     : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL,
        }
    }

    /// Checks the configuration is complete before a run.
    /// Setters already validated values; only presence and length agreement remain.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x  = self.x;
        let y  = self.y;
        let dy = self.dy;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if dy.is_empty() {
            return Err(InterpolationError::MissingDerivative);
        }
        if dy.len() != y.len() {
            return Err(InterpolationError::DerivativeLength { y_len: y.len(), dy_len: dy.len() });
        }
        Ok(())
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn dy(&self) -> &'a [f64] { self.dy }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self)  -> f64 { self.x_min_spacing }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a[f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a[f64]) { self.y = v; }
    pub(crate) fn with_dy(&mut self, v: &'a[f64]) { self.dy = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a[f64]) { self.x_eval = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }
                for i in 1..v.len() {
                    if (v[i] - v[i - 1]).abs() < self.common.x_min_spacing {
                        return Err(InterpolationError::DuplicateX {
                            x1: v[i - 1],
                            x2: v[i],
                        });
                    }
                    if v[i] <= v[i - 1] {
                        return Err(InterpolationError::NonIncreasingX);
                    }
                }

                // length agreement check
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
                }
                let dy_len = self.common.dy.len();
                if y_len == 0 && dy_len != 0 && dy_len != v.len() {
                    return Err(InterpolationError::DerivativeLength { y_len: v.len(), dy_len });
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                let x_len = self.common.x.len();
                let y_len = v.len();
                if x_len != 0 && y_len != x_len {
                    return Err(InterpolationError::UnequalLength { x_len, y_len });
                }
                let dy_len = self.common.dy.len();
                if dy_len != 0 && dy_len != y_len {
                    return Err(InterpolationError::DerivativeLength { y_len, dy_len });
                }

                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_dy(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::MissingDerivative);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                // dy pairs with y; fall back to x when y is not set yet
                let expected = match (self.common.y.len(), self.common.x.len()) {
                    (0, 0)     => None,
                    (0, x_len) => Some(x_len),
                    (y_len, _) => Some(y_len),
                };
                if let Some(y_len) = expected {
                    if v.len() != y_len {
                        return Err(InterpolationError::DerivativeLength { y_len, dy_len: v.len() });
                    }
                }

                self.common.with_dy(v);
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                self.common.with_x_eval(v);
                Ok(self)
            }

            /// Must be called before [`Self::set_x`] to affect node validation.
            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }

                self.common.with_x_min_spacing(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
