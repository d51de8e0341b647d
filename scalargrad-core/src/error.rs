use thiserror::Error;

/// Custom error type for the scalargrad engine.
///
/// Every variant describes a programmer error detected while the graph is being built
/// (or rewound), never during the backward pass itself.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum AutogradError {
    #[error("Invalid operand for operation {operation}: {reason}")]
    InvalidOperand { operation: String, reason: String },

    #[error("Operands of operation {operation} belong to different tapes")]
    TapeMismatch { operation: String },

    #[error("Node {index} was discarded by a tape rewind")]
    StaleNode { index: usize },

    #[error("Cannot set the value of node {index} (op '{op}'): only leaves may be mutated")]
    NonLeafMutation { index: usize, op: String },

    #[error("Input length mismatch in {module}: expected {expected}, got {actual}")]
    InputLengthMismatch {
        expected: usize,
        actual: usize,
        module: String,
    },

    #[error("Invalid checkpoint: cannot rewind to length {checkpoint}, tape holds {len} nodes")]
    InvalidCheckpoint { checkpoint: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
