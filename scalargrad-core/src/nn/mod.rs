//! Neural-network building blocks on top of the scalar engine.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

pub use layers::{Layer, Mlp, MlpConfig, Neuron};
pub use losses::{MseLoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
