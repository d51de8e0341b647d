use crate::error::AutogradError;
use crate::value::{Operand, Value};

/// Specifies the reduction applied by [`MseLoss`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl std::str::FromStr for Reduction {
    type Err = AutogradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(AutogradError::InvalidConfig(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// `(prediction - target)^2`.
pub fn squared_error(
    prediction: &Value,
    target: impl Into<Operand>,
) -> Result<Value, AutogradError> {
    prediction.sub(target)?.pow(2.0)
}

/// `Σ (predictionᵢ - targetᵢ)^2` over paired predictions and targets.
///
/// # Errors
/// [`AutogradError::InputLengthMismatch`] if the slices differ in length,
/// [`AutogradError::InvalidOperand`] if they are empty.
pub fn sum_squared_error(
    predictions: &[Value],
    targets: &[Value],
) -> Result<Value, AutogradError> {
    if predictions.len() != targets.len() {
        return Err(AutogradError::InputLengthMismatch {
            expected: predictions.len(),
            actual: targets.len(),
            module: "sum_squared_error".to_string(),
        });
    }
    let mut pairs = predictions.iter().zip(targets);
    let (p, t) = pairs.next().ok_or_else(|| AutogradError::InvalidOperand {
        operation: "sum_squared_error".to_string(),
        reason: "no predictions".to_string(),
    })?;
    let mut total = squared_error(p, t)?;
    for (p, t) in pairs {
        total = total.add(&squared_error(p, t)?)?;
    }
    Ok(total)
}

/// Mean squared error over a batch of scalar predictions.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node; `Mean` divides the sum of squared errors by the batch size.
    pub fn calculate(
        &self,
        predictions: &[Value],
        targets: &[Value],
    ) -> Result<Value, AutogradError> {
        let total = sum_squared_error(predictions, targets)?;
        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => total.div(predictions.len() as f64),
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
