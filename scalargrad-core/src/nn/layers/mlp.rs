use crate::error::AutogradError;
use crate::nn::layers::{check_input_len, Layer};
use crate::nn::{Module, Parameter};
use crate::tape::Tape;
use crate::value::Value;
use log::debug;
use rand::Rng;

/// Sizes of a two-layer perceptron.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlpConfig {
    pub in_size: usize,
    /// Width of the hidden layer.
    pub mid_size: usize,
    pub out_size: usize,
}

/// Two-layer perceptron: `output(input(x))`, ReLU on every neuron.
#[derive(Debug, Clone)]
pub struct Mlp {
    input: Layer,
    output: Layer,
}

impl Mlp {
    pub fn new(
        tape: &Tape,
        in_size: usize,
        mid_size: usize,
        out_size: usize,
    ) -> Result<Self, AutogradError> {
        Self::with_rng(tape, in_size, mid_size, out_size, &mut rand::thread_rng())
    }

    pub fn with_rng(
        tape: &Tape,
        in_size: usize,
        mid_size: usize,
        out_size: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, AutogradError> {
        let input = Layer::with_rng(tape, in_size, mid_size, rng)?;
        let output = Layer::with_rng(tape, mid_size, out_size, rng)?;
        debug!(
            "Created Mlp {} -> {} -> {} ({} parameters)",
            in_size,
            mid_size,
            out_size,
            input.num_parameters() + output.num_parameters()
        );
        Ok(Mlp { input, output })
    }

    pub fn from_config(
        tape: &Tape,
        config: MlpConfig,
        rng: &mut impl Rng,
    ) -> Result<Self, AutogradError> {
        Self::with_rng(tape, config.in_size, config.mid_size, config.out_size, rng)
    }

    pub fn config(&self) -> MlpConfig {
        MlpConfig {
            in_size: self.input.n_inputs(),
            mid_size: self.input.n_outputs(),
            out_size: self.output.n_outputs(),
        }
    }

    pub fn input_layer(&self) -> &Layer {
        &self.input
    }

    pub fn output_layer(&self) -> &Layer {
        &self.output
    }
}

impl Module for Mlp {
    type Output = Vec<Value>;

    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, AutogradError> {
        check_input_len(inputs, self.input.n_inputs(), "Mlp")?;
        let hidden = self.input.forward(inputs)?;
        self.output.forward(&hidden)
    }

    fn parameters(&self) -> Vec<Parameter> {
        let mut params = self.input.parameters();
        params.extend(self.output.parameters());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        let prefixed = |prefix: &'static str, layer: &Layer| {
            layer
                .named_parameters()
                .into_iter()
                .map(move |(name, p)| (format!("{}.{}", prefix, name), p))
        };
        prefixed("input", &self.input)
            .chain(prefixed("output", &self.output))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
