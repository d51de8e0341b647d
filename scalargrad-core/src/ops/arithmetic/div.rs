use crate::error::AutogradError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::{Operand, Value};

/// Divides as `a * b^(-1)`; no derivative code of its own.
///
/// Division by zero is not special-cased: the forward value follows IEEE 754.
pub fn div_op(a: &Value, b: impl Into<Operand>) -> Result<Value, AutogradError> {
    a.try_read(|_| ())?;
    let b = b.into().lift(a, "div")?;
    mul_op(a, &pow_op(&b, -1.0)?)
}

impl Value {
    /// See [`div_op`].
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, other: impl Into<Operand>) -> Result<Value, AutogradError> {
        div_op(self, other)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
