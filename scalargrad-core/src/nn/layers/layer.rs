use crate::error::AutogradError;
use crate::nn::layers::{check_input_len, Neuron};
use crate::nn::{Module, Parameter};
use crate::tape::Tape;
use crate::value::Value;
use log::debug;
use rand::Rng;

/// `n_outputs` neurons reading the same `n_inputs` inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_inputs: usize,
}

impl Layer {
    pub fn new(tape: &Tape, n_inputs: usize, n_outputs: usize) -> Result<Self, AutogradError> {
        Self::with_rng(tape, n_inputs, n_outputs, &mut rand::thread_rng())
    }

    pub fn with_rng(
        tape: &Tape,
        n_inputs: usize,
        n_outputs: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, AutogradError> {
        if n_outputs == 0 {
            return Err(AutogradError::InvalidConfig(
                "Layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..n_outputs)
            .map(|_| Neuron::with_rng(tape, n_inputs, rng))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Created Layer {} -> {}", n_inputs, n_outputs);
        Ok(Layer { neurons, n_inputs })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    type Output = Vec<Value>;

    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, AutogradError> {
        check_input_len(inputs, self.n_inputs, "Layer")?;
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.neurons.iter().flat_map(Neuron::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, neuron)| {
                neuron
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neuron{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
