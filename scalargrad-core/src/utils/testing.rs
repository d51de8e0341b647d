use crate::tape::Tape;
use crate::value::Value;

/// Creates one leaf per entry of `data` on `tape`.
pub(crate) fn leaves(tape: &Tape, data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| tape.leaf(x)).collect()
}

/// Checks that a value and its gradient are within `tolerance` of the expected numbers.
/// Panics with both numbers on mismatch.
pub(crate) fn check_value_near(
    actual: &Value,
    expected_value: f64,
    expected_grad: f64,
    tolerance: f64,
) {
    let (value, grad) = (actual.value(), actual.grad());
    if (value - expected_value).abs() > tolerance {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, tolerance={:?}",
            value, expected_value, tolerance
        );
    }
    if (grad - expected_grad).abs() > tolerance {
        panic!(
            "Grad mismatch: actual={:?}, expected={:?}, tolerance={:?}",
            grad, expected_grad, tolerance
        );
    }
}
