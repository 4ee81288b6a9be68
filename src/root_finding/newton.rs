//! Newton-Raphson iteration with a caller-supplied derivative.
//!
//! Independent of [`crate::interpolation`]; nothing is shared with it.

use log::{debug, trace};

use super::errors::RootFindingError;


#[inline]
fn value_at<F>(f: &mut F, x: f64) -> Result<f64, RootFindingError>
where F: FnMut(f64) -> f64 {
    let fx = f(x);
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx });
    }
    Ok(fx)
}

#[inline]
fn slope_at<G>(df: &mut G, x: f64) -> Result<f64, RootFindingError>
where G: FnMut(f64) -> f64 {
    let dfx = df(x);
    if !dfx.is_finite() {
        return Err(RootFindingError::DerivativeNotFinite { x, dfx });
    }
    Ok(dfx)
}

/// `x - f(x) / f'(x)`, rejecting a non-finite step or landing point.
#[inline]
fn next_iterate(x: f64, fx: f64, dfx: f64) -> Result<f64, RootFindingError> {
    let step = -fx / dfx;
    if !step.is_finite() {
        return Err(RootFindingError::DerivativeTooSmall { x, dfx });
    }
    let x_next = x + step;
    if !x_next.is_finite() {
        return Err(RootFindingError::StepNotFinite { x, step });
    }
    Ok(x_next)
}


/// Runs at most `max_iter` Newton steps from `x0` and returns every iterate.
///
/// ```text
/// x_{k+1} = x_k - f(x_k) / f'(x_k)
/// ```
///
/// # Returns
/// `[x0, x1, ..., x_k]`, where `x_k` is the first iterate with
/// `|f(x_k)| < tol`. If no iterate gets there, all `max_iter + 1`
/// iterates are returned. A guess that already satisfies the
/// tolerance gives `[x0]`.
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`]        : `x0` non-finite
/// - [`RootFindingError::InvalidMaxIter`]      : `max_iter == 0`
/// - [`RootFindingError::InvalidTolerance`]    : `tol <= 0` or non-finite
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`RootFindingError::DerivativeNotFinite`] : `f'(x)` produced NaN/inf
/// - [`RootFindingError::DerivativeTooSmall`]  : `-f/f'` non-finite
/// - [`RootFindingError::StepNotFinite`]       : `x + step` overflowed
///
/// # Notes
/// - There is no step-size or stagnation exit. An iterate that stops
///   moving is repeated until `max_iter` runs out.
/// - Convergence is local. A poor `x0` can diverge or cycle.
pub fn find_root<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    max_iter: usize,
    tol: f64,
) -> Result<Vec<f64>, RootFindingError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(RootFindingError::InvalidGuess { x0 });
    }
    if max_iter == 0 {
        return Err(RootFindingError::InvalidMaxIter { got: max_iter });
    }
    if !tol.is_finite() || tol <= 0.0 {
        return Err(RootFindingError::InvalidTolerance { got: tol });
    }

    let mut iterates = Vec::with_capacity(max_iter + 1);
    let mut x  = x0;
    let mut fx = value_at(&mut func, x)?;
    iterates.push(x);

    while iterates.len() <= max_iter && fx.abs() >= tol {
        let dfx = slope_at(&mut dfunc, x)?;
        x  = next_iterate(x, fx, dfx)?;
        fx = value_at(&mut func, x)?;
        trace!("newton: k={} x={x} f(x)={fx}", iterates.len());
        iterates.push(x);
    }

    debug!(
        "newton: stopped after {} steps, |f(x)|={} (tol {tol})",
        iterates.len() - 1,
        fx.abs(),
    );
    Ok(iterates)
}
