use crate::error::AutogradError;

/// The local derivative rule of a node, as a closed set of primitives.
///
/// Every differentiable operation is one of these variants; negate, subtract and divide are
/// built from them and need no rule of their own. The rule only ever *adds* into parent
/// gradients, which is what makes accumulation over several paths correct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// No parents, nothing to propagate.
    Leaf,
    Add,
    Mul,
    /// `base ^ exponent` with a plain numeric exponent.
    Pow { exponent: f64 },
    Relu,
}

impl BackwardOp {
    /// Diagnostic label stored on the node.
    pub fn label(&self) -> &'static str {
        match self {
            BackwardOp::Leaf => "",
            BackwardOp::Add => "+",
            BackwardOp::Mul => "*",
            BackwardOp::Pow { .. } => "^",
            BackwardOp::Relu => "relu",
        }
    }

    /// Number of parents a node produced by this rule has.
    pub fn arity(&self) -> usize {
        match self {
            BackwardOp::Leaf => 0,
            BackwardOp::Pow { .. } | BackwardOp::Relu => 1,
            BackwardOp::Add | BackwardOp::Mul => 2,
        }
    }

    /// Computes the forward value from the operand values.
    pub fn forward(&self, operands: &[f64]) -> Result<f64, AutogradError> {
        let value = match (*self, operands) {
            (BackwardOp::Add, &[a, b]) => a + b,
            (BackwardOp::Mul, &[a, b]) => a * b,
            (BackwardOp::Pow { exponent }, &[a]) => a.powf(exponent),
            (BackwardOp::Relu, &[a]) => a.max(0.0),
            _ => return Err(self.arity_error(operands.len())),
        };
        Ok(value)
    }

    /// Contributions of `upstream` (the result's gradient) to each parent's gradient.
    ///
    /// `operands` are the parent values and `result` the node's own value. Only the first
    /// `arity()` entries of the returned array are meaningful.
    ///
    /// # Errors
    /// [`AutogradError::InvalidOperand`] if `operands` does not hold `arity()` values.
    pub fn propagate(
        &self,
        operands: &[f64],
        result: f64,
        upstream: f64,
    ) -> Result<[f64; 2], AutogradError> {
        let contributions = match (*self, operands) {
            (BackwardOp::Leaf, &[]) => [0.0, 0.0],
            (BackwardOp::Add, &[_, _]) => [upstream, upstream],
            (BackwardOp::Mul, &[a, b]) => [upstream * b, upstream * a],
            // d(a^0)/da is 0 everywhere, including at a = 0 where k * a^(k-1) is NaN.
            (BackwardOp::Pow { exponent }, &[_]) if exponent == 0.0 => [0.0, 0.0],
            (BackwardOp::Pow { exponent }, &[a]) => {
                [upstream * exponent * a.powf(exponent - 1.0), 0.0]
            }
            // The derivative at exactly zero is taken as 0.
            (BackwardOp::Relu, &[_]) => [if result > 0.0 { upstream } else { 0.0 }, 0.0],
            _ => return Err(self.arity_error(operands.len())),
        };
        Ok(contributions)
    }

    fn arity_error(&self, actual: usize) -> AutogradError {
        AutogradError::InvalidOperand {
            operation: self.name().to_string(),
            reason: format!("expected {} operand(s), got {}", self.arity(), actual),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            BackwardOp::Leaf => "leaf",
            BackwardOp::Add => "add",
            BackwardOp::Mul => "mul",
            BackwardOp::Pow { .. } => "pow",
            BackwardOp::Relu => "relu",
        }
    }
}
