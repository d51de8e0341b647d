use crate::error::AutogradError;
use crate::nn::init::uniform_;
use crate::nn::layers::check_input_len;
use crate::nn::{Module, Parameter};
use crate::tape::Tape;
use crate::value::Value;
use log::debug;
use rand::Rng;

/// One ReLU unit: `relu(bias + Σ wᵢ·xᵢ)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights, initialised from the thread RNG.
    pub fn new(tape: &Tape, n_inputs: usize) -> Result<Self, AutogradError> {
        Self::with_rng(tape, n_inputs, &mut rand::thread_rng())
    }

    /// Creates a neuron whose weights and bias are drawn uniformly from [-1, 1].
    pub fn with_rng(
        tape: &Tape,
        n_inputs: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, AutogradError> {
        if n_inputs == 0 {
            return Err(AutogradError::InvalidConfig(
                "Neuron needs at least one input".to_string(),
            ));
        }
        let weights = (0..n_inputs)
            .map(|_| uniform_(tape, -1.0, 1.0, rng))
            .collect::<Result<Vec<_>, _>>()?;
        let bias = uniform_(tape, -1.0, 1.0, rng)?;
        debug!("Created Neuron with {} inputs", n_inputs);
        Ok(Neuron { weights, bias })
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    type Output = Value;

    fn forward(&self, inputs: &[Value]) -> Result<Value, AutogradError> {
        check_input_len(inputs, self.n_inputs(), "Neuron")?;
        let mut act: Value = (*self.bias).clone();
        for (w, x) in self.weights.iter().zip(inputs) {
            act = act.add(&w.mul(x)?)?;
        }
        act.relu()
    }

    /// Weights followed by the bias.
    fn parameters(&self) -> Vec<Parameter> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        let mut named: Vec<(String, Parameter)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), w.clone()))
            .collect();
        named.push(("b".to_string(), self.bias.clone()));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
