use super::*;

#[test]
fn test_check_grad_polynomial_ok() {
    // f(x, y) = x^3 * y + y^2
    let func = |v: &[Value]| v[0].pow(3.0)?.mul(&v[1])?.add(&v[1].pow(2.0)?);
    let result = check_grad(func, &[1.3, -0.7], 1e-6, 1e-5);
    assert!(result.is_ok(), "grad check failed: {:?}", result.err());
}

#[test]
fn test_check_grad_detects_wrong_gradient() {
    let func = |v: &[Value]| {
        // Same value as x but detached from it, so dx is lost.
        let detached = v[0].tape().constant(v[0].value());
        detached.mul(&v[1])
    };
    match check_grad(func, &[2.0, 3.0], 1e-6, 1e-5) {
        Err(GradCheckError::GradientMismatch {
            input_index,
            analytical_grad,
            numerical_grad,
            ..
        }) => {
            assert_eq!(input_index, 0);
            assert_eq!(analytical_grad, 0.0);
            approx::assert_abs_diff_eq!(numerical_grad, 3.0, epsilon = 1e-4);
        }
        other => panic!("Expected GradientMismatch, got {:?}", other),
    }
}

#[test]
fn test_check_grad_forward_error_is_reported() {
    let func = |v: &[Value]| v[0].pow(&v[1]);
    match check_grad(func, &[2.0, 3.0], 1e-6, 1e-5) {
        Err(GradCheckError::ForwardPassError(AutogradError::InvalidOperand { operation, .. })) => {
            assert_eq!(operation, "pow");
        }
        other => panic!("Expected ForwardPassError, got {:?}", other),
    }
}

#[test]
fn test_check_grad_non_finite_numerical() {
    // 1/x at 0 blows up in both directions.
    let func = |v: &[Value]| v[0].pow(-1.0);
    let result = check_grad(func, &[0.0], 1e-6, 1e-5);
    assert!(matches!(
        result,
        Err(GradCheckError::NumericalGradNaNOrInfinite { input_index: 0, .. })
            | Err(GradCheckError::AnalyticalGradNaNOrInfinite { input_index: 0, .. })
    ));
}

#[test]
fn test_check_grad_tolerance_is_absolute() {
    // The detached term shifts the analytical gradient of a large slope by 5e-5.
    let func = |v: &[Value]| {
        let offset = v[0].tape().constant(5e-5 * v[0].value());
        v[0].mul(1000.0)?.add(&offset)
    };
    match check_grad(func, &[1.0], 1e-6, 1e-5) {
        Err(GradCheckError::GradientMismatch {
            input_index,
            difference,
            ..
        }) => {
            assert_eq!(input_index, 0);
            approx::assert_abs_diff_eq!(difference, 5e-5, epsilon = 5e-6);
        }
        other => panic!("Expected GradientMismatch, got {:?}", other),
    }
}
