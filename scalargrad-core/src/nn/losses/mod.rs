pub mod mse;

pub use mse::{squared_error, sum_squared_error, MseLoss, Reduction};
