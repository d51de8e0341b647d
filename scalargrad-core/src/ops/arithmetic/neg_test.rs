use super::*;
use crate::tape::Tape;

#[test]
fn test_neg_forward_and_backward() -> Result<(), AutogradError> {
    let tape = Tape::new();
    let x = tape.leaf(2.5);
    let y = neg_op(&x)?;
    assert_eq!(y.value(), -2.5);
    // Built from multiply: x * const(-1).
    assert_eq!(y.op(), "*");
    assert_eq!(y.parents()[1].value(), -1.0);
    y.backprop()?;
    assert_eq!(x.grad(), -1.0);
    Ok(())
}

#[test]
fn test_double_negation() -> Result<(), AutogradError> {
    let tape = Tape::new();
    let x = tape.leaf(-3.0);
    let y = x.neg()?.neg()?;
    y.backprop()?;
    assert_eq!(y.value(), -3.0);
    assert_eq!(x.grad(), 1.0);
    Ok(())
}
