//! # Autograd
//!
//! The backward machinery of the engine:
//!
//! - [`BackwardOp`]: the tagged local derivative rule stored on every node.
//! - `graph`: the reverse-topological ordering used by [`Value::backprop`](crate::Value::backprop).
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub(crate) mod graph;

pub use backward_op::BackwardOp;
