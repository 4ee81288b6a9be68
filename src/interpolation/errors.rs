//! Interpolation error types.
//!
//! Every variant of [`InterpolationError`] is an invalid-input condition. 
//! All of them are detected before the divided-difference table is built, 
//! and none is ever partially recovered: the whole call aborts. 
//!
//! Division by zero from duplicate nodes is *not* an error variant. 
//! The unvalidated [`crate::interpolation::hermite::build`] path lets it 
//! surface as `inf`/`NaN` coefficients; the [`crate::interpolation::hermite::HermiteCfg`] 
//! path rejects duplicates up front.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("derivative data required and must match sample count: \
             y has {y_len} elements, dy has {dy_len}")]
    DerivativeLength { y_len: usize, dy_len: usize },

    #[error("derivative data required: dy was never set")]
    MissingDerivative,

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 } 
}

impl InterpolationError { 
    /// Every interpolation error is an invalid-input error. 
    pub const fn is_invalid_input(&self) -> bool { 
        match self { 
            InterpolationError::UnequalLength { .. }
            | InterpolationError::DerivativeLength { .. }
            | InterpolationError::MissingDerivative
            | InterpolationError::NonFiniteVec { .. }
            | InterpolationError::EmptyInput
            | InterpolationError::DuplicateX { .. }
            | InterpolationError::NonIncreasingX
            | InterpolationError::InvalidXTol { .. } => true, 
        }
    }
}


/// Checks sample-set shape shared by every entry point. 
/// 
/// ┌ `x`, `y` non-empty  
/// ├ `len(x) == len(y)` 
/// └ `len(dy) == len(y)` 
pub(crate) fn check_lengths(x: &[f64], y: &[f64], dy: &[f64]) -> Result<(), InterpolationError> { 
    if x.is_empty() || y.is_empty() { 
        return Err(InterpolationError::EmptyInput); 
    }
    if x.len() != y.len() { 
        return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() }); 
    }
    if dy.len() != y.len() { 
        return Err(InterpolationError::DerivativeLength { y_len: y.len(), dy_len: dy.len() }); 
    }
    Ok(())
}
