use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::ops::apply_binary_op;
use crate::value::{Operand, Value};

/// Adds two scalars: `a + b`.
///
/// Backward: both operands receive the upstream gradient unchanged. A numeric `b` is lifted
/// to a constant leaf on `a`'s tape.
pub fn add_op(a: &Value, b: impl Into<Operand>) -> Result<Value, AutogradError> {
    apply_binary_op(a, b.into(), BackwardOp::Add, "add")
}

impl Value {
    /// See [`add_op`].
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: impl Into<Operand>) -> Result<Value, AutogradError> {
        add_op(self, other)
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
