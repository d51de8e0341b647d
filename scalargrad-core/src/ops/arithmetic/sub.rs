use crate::error::AutogradError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::{Operand, Value};

/// Subtracts as `a + (-b)`; no derivative code of its own.
pub fn sub_op(a: &Value, b: impl Into<Operand>) -> Result<Value, AutogradError> {
    a.try_read(|_| ())?;
    let b = b.into().lift(a, "sub")?;
    add_op(a, &neg_op(&b)?)
}

impl Value {
    /// See [`sub_op`].
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: impl Into<Operand>) -> Result<Value, AutogradError> {
        sub_op(self, other)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
