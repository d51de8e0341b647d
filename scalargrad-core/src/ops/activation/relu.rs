use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Rectified Linear Unit: `max(0, a)`.
///
/// Backward: the upstream gradient passes through when the result is positive and is
/// dropped otherwise. At exactly zero the gradient is 0.
pub fn relu_op(a: &Value) -> Result<Value, AutogradError> {
    apply_unary_op(a, BackwardOp::Relu, "relu")
}

impl Value {
    /// See [`relu_op`].
    pub fn relu(&self) -> Result<Value, AutogradError> {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
