use crate::error::AutogradError;
use crate::nn::Parameter;
use crate::optim::Optimizer;
use log::debug;

/// Plain stochastic gradient descent: `value -= lr * grad` for every parameter.
#[derive(Debug, Clone)]
pub struct Sgd {
    lr: f64,
    steps: usize,
}

impl Sgd {
    /// Creates a new SGD optimizer.
    ///
    /// # Errors
    /// [`AutogradError::InvalidConfig`] if `lr` is negative, NaN or infinite.
    pub fn new(lr: f64) -> Result<Self, AutogradError> {
        if !lr.is_finite() || lr < 0.0 {
            return Err(AutogradError::InvalidConfig(format!(
                "learning rate must be finite and non-negative, got {}",
                lr
            )));
        }
        Ok(Sgd { lr, steps: 0 })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, params: &[Parameter]) -> Result<(), AutogradError> {
        for param in params {
            param.step(self.lr)?;
        }
        self.steps += 1;
        debug!(
            "SGD step {} updated {} parameters (lr {})",
            self.steps,
            params.len(),
            self.lr
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
