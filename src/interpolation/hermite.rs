//! Hermite (Divided-Difference) Interpolation
//!
//! Implements global [Hermite interpolation](https://en.wikipedia.org/wiki/Hermite_interpolation)
//! matching both values `y[i]` and first derivatives `dy[i]` at every node `x[i]`.
//!
//! Each node is repeated once (`x0, x0, x1, x1, ...`). A divided difference
//! over a zero-width window `[x_i, x_i]` is defined as `dy[i]`, so the
//! ordinary Newton recurrence over the doubled sequence yields the unique
//! polynomial of degree `<= 2n - 1` honoring all `2n` constraints.
//!
//! Coefficients are evaluated at query points by nested multiplication of
//! the Newton form, accumulating terms left to right.


use log::debug;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::{check_lengths, InterpolationError};
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;


/// Hermite interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`HermiteCfg::new`] then setters; `x`, `y` and `dy` are required.
///
/// # Defaults
/// - Minimum allowed spacing between adjacent nodes;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
#[derive(Debug, Clone, Copy)]
pub struct HermiteCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> HermiteCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl<'a> Default for HermiteCfg<'a> {
    fn default() -> Self {
        Self::new()
    }
}
impl_common_cfg!(HermiteCfg<'a>);


/// Dense `rows x cols` scratch table in a single buffer, row-major.
/// Column `k - 1` holds the order-`k` divided differences; its active
/// rows shrink by one per column.
struct DividedDifferenceTable {
    data: Vec<f64>,
    cols: usize,
}
impl DividedDifferenceTable {
    fn zeros(rows: usize, cols: usize) -> Self {
        Self { data: vec![0.0; rows * cols], cols }
    }
    #[inline]
    fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }
    #[inline]
    fn set(&mut self, row: usize, col: usize, v: f64) {
        self.data[row * self.cols + col] = v;
    }
}


/// Repeats every element once: `[a, b]` -> `[a, a, b, b]`.
#[inline]
fn doubled(v: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(2 * v.len());
    for &vi in v {
        out.push(vi);
        out.push(vi);
    }
    out
}


/// Computes Hermite divided-difference coefficients.
///
/// Lengths must already agree and be non-zero. Returns `c` (length `2n`) s.t.
/// `P(x) = c[0] + c[1](x - z0) + ... + c[2n-1](x - z0)...(x - z_{2n-2})`
/// where `z` is the doubled node sequence.
fn hermite_coefficients(x: &[f64], y: &[f64], dy: &[f64]) -> Vec<f64> {
    let n = x.len();
    let m = 2 * n;

    let z  = doubled(x);
    let fz = doubled(y);

    let mut table = DividedDifferenceTable::zeros(m, m - 1);

    // first order: derivative on repeated pairs, secant between nodes
    for i in 0..n - 1 {
        table.set(2 * i, 0, dy[i]);
        table.set(
            2 * i + 1,
            0,
            (fz[2 * i + 2] - fz[2 * i + 1]) / (z[2 * i + 2] - z[2 * i + 1]),
        );
    }
    table.set(m - 2, 0, dy[n - 1]);

    // order k lives in column k - 1, rows 0..m-k
    // k = m - 1 is the apex: a single entry spanning z[m-1] - z[0]
    for k in 2..m {
        for j in 0..m - k {
            let num = table.get(j + 1, k - 2) - table.get(j, k - 2);
            table.set(j, k - 1, num / (z[j + k] - z[j]));
        }
    }

    let mut coeffs = Vec::with_capacity(m);
    coeffs.push(y[0]);
    for col in 0..m - 1 {
        coeffs.push(table.get(0, col));
    }

    coeffs
}


/// `c[0] + c[1](q - z0) + c[2](q - z0)(q - z1) + ...`, accumulated left to right.
#[inline]
fn newton_form(coeffs: &[f64], z: &[f64], q: f64) -> f64 {
    let mut basis  = 1.0;
    let mut result = coeffs[0];
    for (&c, &zj) in coeffs[1..].iter().zip(z) {
        basis  *= q - zj;
        result += c * basis;
    }
    result
}


/// First derivative of [`newton_form`]; the basis derivative follows the
/// product rule `B'_{j} = B'_{j-1} (q - z_{j-1}) + B_{j-1}`.
#[inline]
fn newton_form_derivative(coeffs: &[f64], z: &[f64], q: f64) -> f64 {
    let mut basis  = 1.0;
    let mut dbasis = 0.0;
    let mut result = 0.0;
    for (&c, &zj) in coeffs[1..].iter().zip(z) {
        dbasis  = dbasis * (q - zj) + basis;
        basis  *= q - zj;
        result += c * dbasis;
    }
    result
}


/// Builds the Hermite interpolating polynomial's Newton-form coefficients.
///
/// # Behavior
/// - Doubles the nodes and values (`x0, x0, x1, x1, ...`).
/// - First-order column: `dy[i]` on each repeated pair, the secant slope
///   between consecutive distinct nodes otherwise.
/// - Higher orders follow the Newton recurrence
///
/// ```text
/// f[z_j .. z_{j+k}] = (f[z_{j+1} .. z_{j+k}] - f[z_j .. z_{j+k-1}]) / (z_{j+k} - z_j)
/// ```
///
/// - Returns `y[0]` followed by the first row of every column (length `2n`).
///
/// # Errors
/// - [`InterpolationError::EmptyInput`]       : `x` or `y` empty
/// - [`InterpolationError::UnequalLength`]    : `len(x) != len(y)`
/// - [`InterpolationError::DerivativeLength`] : `len(dy) != len(y)`
///
/// # Notes
/// - Nodes are *not* checked for distinctness here. Duplicate original
///   nodes divide by zero and yield `inf`/`NaN` coefficients. Use
///   [`HermiteCfg`] for validated input.
pub fn build(x: &[f64], y: &[f64], dy: &[f64]) -> Result<Vec<f64>, InterpolationError> {
    check_lengths(x, y, dy)?;
    debug!("hermite: building divided-difference table over {} doubled nodes", 2 * x.len());

    Ok(hermite_coefficients(x, y, dy))
}


/// Builds the Hermite polynomial and evaluates it at every query point.
///
/// # Returns
/// `(query, values)`, the query slice unchanged and one value per query
/// point in the same order. An empty query yields an empty result.
///
/// # Errors
/// Propagates [`build`] errors unchanged.
pub fn evaluate<'q>(
    x: &[f64],
    y: &[f64],
    dy: &[f64],
    query: &'q [f64],
) -> Result<(&'q [f64], Vec<f64>), InterpolationError> {
    let coeffs = build(x, y, dy)?;
    let z      = doubled(x);
    debug!("hermite: evaluating degree {} polynomial at {} points", coeffs.len() - 1, query.len());

    let values = query
        .iter()
        .map(|&q| newton_form(&coeffs, &z, q))
        .collect();

    Ok((query, values))
}


/// A built Hermite interpolating polynomial in Newton form.
///
/// Owns the coefficients and the doubled nodes so one build can serve
/// any number of evaluations.
#[derive(Debug, Clone, PartialEq)]
pub struct HermitePolynomial {
    coefficients: Vec<f64>,
    nodes: Vec<f64>,
}

impl HermitePolynomial {
    /// Same validation and notes as [`build`].
    pub fn new(x: &[f64], y: &[f64], dy: &[f64]) -> Result<Self, InterpolationError> {
        let coefficients = build(x, y, dy)?;
        Ok(Self { coefficients, nodes: doubled(x) })
    }

    /// Newton-form coefficients, length `2n`.
    pub fn coefficients(&self) -> &[f64] { &self.coefficients }

    /// Doubled node sequence, length `2n`.
    pub fn nodes(&self) -> &[f64] { &self.nodes }

    /// Upper bound on the polynomial degree, `2n - 1`.
    pub fn degree(&self) -> usize { self.coefficients.len() - 1 }

    /// Evaluates `P'(x)`.
    pub fn eval_derivative(&self, x: f64) -> f64 {
        newton_form_derivative(&self.coefficients, &self.nodes, x)
    }

    pub fn into_coefficients(self) -> Vec<f64> { self.coefficients }
}

impl Interpolator for HermitePolynomial {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        newton_form(&self.coefficients, &self.nodes, x)
    }
}


/// Performs Hermite interpolation over the data in [`HermiteCfg`].
///
/// # Behavior
/// - Builds the coefficients as in [`build`].
/// - Evaluates every point in `cfg.common.x_eval()`. Points outside
///   `[x[0], x[n-1]]` are extrapolated by the same polynomial.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"hermite"`
/// - `n_provided`     : number of (x, y, dy) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
/// - `coefficients`   : Newton-form coefficients
///
/// # Errors
/// - [`InterpolationError::EmptyInput`]        : `x` or `y` never set
/// - [`InterpolationError::MissingDerivative`] : `dy` never set
/// - [`InterpolationError::UnequalLength`] / [`InterpolationError::DerivativeLength`]
pub fn interpolate(cfg: HermiteCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let dy    = cfg.common.dy();
    let evals = cfg.common.x_eval();

    let n_provided  = x.len();
    let n_evaluated = evals.len();
    debug!("hermite: interpolating {} nodes at {} points", n_provided, n_evaluated);

    let mut report = InterpolationReport::new(
        Algorithm::Hermite,
        n_provided,
        n_evaluated,
    );

    let poly = HermitePolynomial::new(x, y, dy)?;
    report.evaluated    = poly.eval_many(evals);
    report.coefficients = poly.into_coefficients();

    Ok(report)
}
