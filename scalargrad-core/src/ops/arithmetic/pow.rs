use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::ops::apply_unary_op;
use crate::value::{Operand, Value};

/// Raises `base` to a plain numeric `exponent`.
///
/// Backward: `base` receives `g * k * base^(k - 1)`, and nothing when `k` is 0.
///
/// # Errors
/// Differentiating with respect to the exponent is not supported: passing a node as the
/// exponent fails with [`AutogradError::InvalidOperand`] before anything is recorded.
pub fn pow_op(base: &Value, exponent: impl Into<Operand>) -> Result<Value, AutogradError> {
    match exponent.into() {
        Operand::Constant(exponent) => apply_unary_op(base, BackwardOp::Pow { exponent }, "pow"),
        Operand::Node(node) => Err(AutogradError::InvalidOperand {
            operation: "pow".to_string(),
            reason: format!(
                "exponent must be a plain number, got node {}",
                node.id().index()
            ),
        }),
    }
}

impl Value {
    /// See [`pow_op`].
    pub fn pow(&self, exponent: impl Into<Operand>) -> Result<Value, AutogradError> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
