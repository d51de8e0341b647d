//! In-place and random initialisation of parameter leaves.

use crate::error::AutogradError;
use crate::nn::Parameter;
use crate::tape::Tape;
use rand::Rng;

/// Creates a parameter leaf on `tape` drawn uniformly from `[low, high]`.
///
/// # Errors
/// [`AutogradError::InvalidConfig`] if the bounds are not finite or `low > high`.
pub fn uniform_(
    tape: &Tape,
    low: f64,
    high: f64,
    rng: &mut impl Rng,
) -> Result<Parameter, AutogradError> {
    if !low.is_finite() || !high.is_finite() || low > high {
        return Err(AutogradError::InvalidConfig(format!(
            "uniform_ needs finite bounds with low <= high, got [{}, {}]",
            low, high
        )));
    }
    let value = if low == high {
        low
    } else {
        rng.gen_range(low..=high)
    };
    Parameter::new(tape.leaf(value))
}

/// Overwrites the parameter's value with `value`.
pub fn fill_(param: &Parameter, value: f64) -> Result<(), AutogradError> {
    param.set_value(value)
}

pub fn zeros_(param: &Parameter) -> Result<(), AutogradError> {
    fill_(param, 0.0)
}

pub fn ones_(param: &Parameter) -> Result<(), AutogradError> {
    fill_(param, 1.0)
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
