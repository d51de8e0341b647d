use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::ops::apply_binary_op;
use crate::value::{Operand, Value};

/// Multiplies two scalars: `a * b`.
///
/// Backward: `a` receives `g * b`, `b` receives `g * a`.
pub fn mul_op(a: &Value, b: impl Into<Operand>) -> Result<Value, AutogradError> {
    apply_binary_op(a, b.into(), BackwardOp::Mul, "mul")
}

impl Value {
    /// See [`mul_op`].
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, other: impl Into<Operand>) -> Result<Value, AutogradError> {
        mul_op(self, other)
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
