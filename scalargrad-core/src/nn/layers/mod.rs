//! Fully connected building blocks: a single neuron, a layer of neurons, a two-layer
//! perceptron.

pub mod layer;
pub mod mlp;
pub mod neuron;

pub use layer::Layer;
pub use mlp::{Mlp, MlpConfig};
pub use neuron::Neuron;

use crate::error::AutogradError;
use crate::value::Value;

pub(crate) fn check_input_len(
    inputs: &[Value],
    expected: usize,
    module: &str,
) -> Result<(), AutogradError> {
    if inputs.len() != expected {
        return Err(AutogradError::InputLengthMismatch {
            expected,
            actual: inputs.len(),
            module: module.to_string(),
        });
    }
    Ok(())
}
