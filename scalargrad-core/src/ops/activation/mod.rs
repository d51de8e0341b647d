//! # Activation Functions
//!
//! Non-linearities applied to a single scalar.
//!
//! ## Currently Implemented:
//! - [`relu_op`]: Rectified Linear Unit.

pub mod relu;

pub use relu::relu_op;
