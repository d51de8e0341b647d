use crate::error::AutogradError;
use crate::tape::Tape;
use crate::value::Value;
use log::{debug, warn};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(AutogradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(AutogradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Autograd error during gradient check: {0}")]
    Autograd(AutogradError),
}

impl From<AutogradError> for GradCheckError {
    fn from(err: AutogradError) -> Self {
        GradCheckError::Autograd(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds a scalar expression from one leaf per entry of `inputs`. It is run once
/// on a fresh tape and back-propagated, then twice more per input with that input moved
/// by `±epsilon`. A gradient passes when its absolute difference from the numerical
/// estimate is within `tolerance`; there is no relative slack for large gradients.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, AutogradError>,
{
    // --- Analytical gradients ---
    let tape = Tape::new();
    let leaves: Vec<Value> = inputs.iter().map(|&x| tape.leaf(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output
        .backprop()
        .map_err(GradCheckError::BackwardPassError)?;

    for (i, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();

        // --- Numerical gradient ---
        let loss_plus = evaluate(&func, inputs, i, epsilon)?;
        let loss_minus = evaluate(&func, inputs, i, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            warn!(
                "Non-finite numerical gradient for input {} (loss+ {}, loss- {})",
                i, loss_plus, loss_minus
            );
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        debug!(
            "[check_grad] input {}: analytical {} numerical {} diff {}",
            i, analytical_grad, numerical_grad, difference
        );
        if difference > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}

/// Runs `func` on a fresh tape with `inputs[index]` shifted by `delta`.
fn evaluate<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, AutogradError>,
{
    let tape = Tape::new();
    let leaves: Vec<Value> = inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| tape.leaf(if i == index { x + delta } else { x }))
        .collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.value())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
