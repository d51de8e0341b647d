use crate::error::AutogradError;
use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Negates a scalar as `a * (-1)`; the gradient comes from the multiply rule.
pub fn neg_op(a: &Value) -> Result<Value, AutogradError> {
    mul_op(a, -1.0)
}

impl Value {
    /// See [`neg_op`].
    #[allow(clippy::should_implement_trait)]
    pub fn neg(&self) -> Result<Value, AutogradError> {
        neg_op(self)
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
