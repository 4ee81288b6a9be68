use approx::assert_abs_diff_eq;
use hermite::interpolation::errors::InterpolationError;
use hermite::interpolation::hermite::{build, interpolate, HermiteCfg};

type HermiteResult = Result<(), InterpolationError>;

#[test]
fn cubic_through_cfg() -> HermiteResult {
    // p(t) = t^3 - t
    let x      = [-1.0, 2.0];
    let y      = [0.0, 6.0];
    let dy     = [2.0, 11.0];
    let x_eval = [0.0, 0.5, 3.0];

    let cfg = HermiteCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_dy(&dy)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "hermite");
    assert_eq!(rep.n_provided, 2);
    assert_eq!(rep.n_evaluated, 3);
    assert_eq!(rep.coefficients.len(), 4);
    assert_abs_diff_eq!(rep.evaluated[0], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(rep.evaluated[1], -0.375, epsilon = 1e-12);
    // outside [x0, x1] the same polynomial applies
    assert_abs_diff_eq!(rep.evaluated[2], 24.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn report_coefficients_match_build() -> HermiteResult {
    let x  = [0.0, 1.0, 2.0];
    let y  = [1.0, 0.0, 1.0];
    let dy = [0.0, 0.0, 0.0];

    let cfg = HermiteCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_dy(&dy)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.coefficients, build(&x, &y, &dy)?);
    assert_eq!(rep.n_evaluated, 0);
    assert!(rep.evaluated.is_empty());
    Ok(())
}

#[test]
fn setter_order_does_not_matter() -> HermiteResult {
    let x  = [0.0, 1.0];
    let y  = [2.0, 3.0];
    let dy = [1.0, 1.0];
    let q  = [0.25];

    let a = interpolate(HermiteCfg::new().set_x(&x)?.set_y(&y)?.set_dy(&dy)?.set_x_eval(&q)?)?;
    let b = interpolate(HermiteCfg::new().set_dy(&dy)?.set_x_eval(&q)?.set_y(&y)?.set_x(&x)?)?;
    assert_eq!(a.evaluated, b.evaluated);
    assert_abs_diff_eq!(a.evaluated[0], 2.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn missing_derivative_error() -> HermiteResult {
    let cfg = HermiteCfg::new()
        .set_x(&[0.0, 1.0])?
        .set_y(&[0.0, 1.0])?;

    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::MissingDerivative));
    Ok(())
}

#[test]
fn empty_derivative_rejected_by_setter() {
    let err = HermiteCfg::new().set_dy(&[]).unwrap_err();
    assert!(matches!(err, InterpolationError::MissingDerivative));
}

#[test]
fn derivative_length_rejected_by_setter() {
    let y  = [0.0, 1.0, 4.0];
    let dy = [0.0, 2.0];
    let err = HermiteCfg::new()
        .set_y(&y).unwrap()
        .set_dy(&dy)
        .unwrap_err();
    assert!(matches!(err, InterpolationError::DerivativeLength { y_len: 3, dy_len: 2 }));
}

#[test]
fn derivative_length_checked_against_later_y() {
    let dy = [0.0, 2.0];
    let y  = [0.0, 1.0, 4.0];
    let err = HermiteCfg::new()
        .set_dy(&dy).unwrap()
        .set_y(&y)
        .unwrap_err();
    assert!(matches!(err, InterpolationError::DerivativeLength { y_len: 3, dy_len: 2 }));
}

#[test]
fn derivative_length_checked_against_x_without_y() {
    let err = HermiteCfg::new()
        .set_x(&[0.0, 1.0, 2.0]).unwrap()
        .set_dy(&[1.0])
        .unwrap_err();
    assert!(matches!(err, InterpolationError::DerivativeLength { y_len: 3, dy_len: 1 }));
}

#[test]
fn unequal_length_error() {
    let x  = [0.0, 1.0, 2.0];
    let y  = [0.0, 1.0];
    let cfg = HermiteCfg::new().set_x(&x).unwrap();
    let err = cfg.set_y(&y).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));
}

#[test]
fn non_increasing_x_error() {
    let x = [0.0, 2.0, 1.0];
    let err = HermiteCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::NonIncreasingX));
}

#[test]
fn duplicate_x_error() {
    let x = [0.0, 0.0, 2.0];
    let err = HermiteCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { x1, x2 } if x1 == 0.0 && x2 == 0.0));
}

#[test]
fn near_duplicate_x_error() {
    let x = [0.0, 1e-13, 1.0];
    let err = HermiteCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));
}

#[test]
fn custom_x_tol_admits_close_nodes() -> HermiteResult {
    let x = [0.0, 1e-13, 1.0];
    HermiteCfg::new().set_x_tol(1e-14)?.set_x(&x)?;
    Ok(())
}

#[test]
fn invalid_x_tol_rejected() {
    let err = HermiteCfg::new().set_x_tol(0.0).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidXTol { got } if got == 0.0));
    let err = HermiteCfg::new().set_x_tol(f64::NAN).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidXTol { .. }));
}

#[test]
fn non_finite_inputs_rejected() {
    let err = HermiteCfg::new().set_y(&[0.0, f64::NAN]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));
    let err = HermiteCfg::new().set_dy(&[f64::INFINITY]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 0 }));
    let err = HermiteCfg::new().set_x_eval(&[0.0, 1.0, f64::NEG_INFINITY]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 2 }));
}

#[test]
fn empty_cfg_rejected() {
    let err = interpolate(HermiteCfg::new()).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
    assert!(err.is_invalid_input());
}

#[test]
fn error_message_names_derivative_requirement() {
    let err = build(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0], &[0.0, 2.0]).unwrap_err();
    assert!(err.to_string().contains("derivative data required and must match sample count"));
}
