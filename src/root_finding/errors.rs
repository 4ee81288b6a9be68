//! Root-finding error types.
//!
//! ┌ argument errors : rejected before `f` is ever called
//! └ runtime errors  : a non-finite value appeared mid-iteration

use thiserror::Error;


#[derive(Debug, Error, Clone, PartialEq)]
pub enum RootFindingError {
    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },

    #[error("vanishing derivative at x={x}, f'(x)={dfx}; step -f/f' is non-finite")]
    DerivativeTooSmall { x: f64, dfx: f64 },

    #[error("next iterate non-finite: x={x}, step={step}")]
    StepNotFinite { x: f64, step: f64 },
}
