use super::*;
use crate::autograd::grad_check::check_grad;
use crate::tape::Tape;
use approx::assert_relative_eq;

#[test]
fn test_div_forward_and_backward() -> Result<(), AutogradError> {
    let tape = Tape::new();
    let (a, b) = (tape.leaf(12.0), tape.leaf(4.0));
    let z = div_op(&a, &b)?;
    assert_relative_eq!(z.value(), 3.0);
    z.backprop()?;
    assert_relative_eq!(a.grad(), 0.25);
    // d(a/b)/db = -a / b^2
    assert_relative_eq!(b.grad(), -0.75);
    Ok(())
}

#[test]
fn test_div_matches_mul_pow_exactly() -> Result<(), AutogradError> {
    let (av, bv) = (1.7, -0.45);

    let tape = Tape::new();
    let (a1, b1) = (tape.leaf(av), tape.leaf(bv));
    let z1 = a1.div(&b1)?;
    z1.backprop()?;

    let tape = Tape::new();
    let (a2, b2) = (tape.leaf(av), tape.leaf(bv));
    let z2 = a2.mul(&b2.pow(-1.0)?)?;
    z2.backprop()?;

    assert_eq!(z1.value(), z2.value());
    assert_eq!(a1.grad(), a2.grad());
    assert_eq!(b1.grad(), b2.grad());
    Ok(())
}

#[test]
fn test_div_by_constant() -> Result<(), AutogradError> {
    let tape = Tape::new();
    let a = tape.leaf(3.0);
    let z = a.div(2.0)?;
    z.backprop()?;
    assert_relative_eq!(z.value(), 1.5);
    assert_relative_eq!(a.grad(), 0.5);
    Ok(())
}

#[test]
fn test_div_grad_check() {
    let func = |v: &[Value]| v[0].div(&v[1]);
    let result = check_grad(func, &[12.0, 4.0], 1e-6, 1e-5);
    assert!(result.is_ok(), "div grad check failed: {:?}", result.err());
}
