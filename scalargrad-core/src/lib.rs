//! Scalar reverse-mode automatic differentiation.
//!
//! Every [`Value`] is one scalar node on a [`Tape`]. Operations append nodes, and
//! [`Value::backprop`] walks the graph in reverse topological order to fill every ancestor's
//! gradient. The [`nn`] and [`optim`] modules build small perceptrons and train them with
//! plain gradient descent.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod node;
pub mod ops;
pub mod optim;
pub mod tape;
pub mod value;

#[cfg(test)]
pub(crate) mod utils;

pub use error::AutogradError;
pub use nn::{Layer, Mlp, MlpConfig, Module, Neuron, Parameter};
pub use node::NodeId;
pub use optim::{Optimizer, Sgd};
pub use tape::{Checkpoint, Tape};
pub use value::{Operand, Value};
