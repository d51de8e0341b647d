//! Parameter update rules.

pub mod sgd;

pub use sgd::Sgd;

use crate::error::AutogradError;
use crate::nn::Parameter;

/// Trait for optimization algorithms.
/// Optimizers update parameters from the gradients left by a backward pass.
pub trait Optimizer {
    /// Performs a single optimization step (parameter update).
    fn step(&mut self, params: &[Parameter]) -> Result<(), AutogradError>;

    /// Clears the gradients of `params`.
    /// Should be called between steps, since backward passes accumulate.
    fn zero_grad(&self, params: &[Parameter]) -> Result<(), AutogradError> {
        for param in params {
            param.zero_grad()?;
        }
        Ok(())
    }
}
