use crate::error::AutogradError;
use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A trainable leaf of a [`Module`](crate::nn::Module).
///
/// Wraps the leaf's [`Value`] handle; cloning shares the node. Reads and graph operations go
/// through `Deref`.
#[derive(Clone)]
pub struct Parameter(Value);

impl Parameter {
    /// Wraps a leaf node.
    ///
    /// # Errors
    /// [`AutogradError::InvalidOperand`] if `value` has parents, since only leaves can be
    /// updated in place; [`AutogradError::StaleNode`] if it was discarded by a rewind.
    pub fn new(value: Value) -> Result<Self, AutogradError> {
        if !value.try_read(|node| node.is_leaf())? {
            return Err(AutogradError::InvalidOperand {
                operation: "Parameter::new".to_string(),
                reason: format!("node {} is not a leaf", value.id().index()),
            });
        }
        Ok(Parameter(value))
    }

    /// Plain gradient-descent update: `value -= lr * grad`.
    ///
    /// This happens outside the graph and does not touch the gradient.
    pub fn step(&self, lr: f64) -> Result<(), AutogradError> {
        let (value, grad) = self.0.try_read(|node| (node.value, node.grad))?;
        self.0.set_value(value - lr * grad)
    }

    /// Consumes the Parameter and returns the underlying handle.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Value> for Parameter {
    fn as_ref(&self) -> &Value {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
