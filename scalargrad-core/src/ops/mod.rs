//! # Operations Module (`ops`)
//!
//! Differentiable operations on [`Value`]s, grouped by kind:
//!
//! - [`arithmetic`]: add, mul, pow (primitives) and neg, sub, div (compositions).
//! - [`activation`]: relu.
//!
//! Each operation has an `xxx_op` function and a `Value` method calling it. Primitives go
//! through [`apply_op`], the single constructor that validates operands, computes the forward
//! value and records the node with its [`BackwardOp`]. Compositions only call other
//! operations and never define derivative code.

pub mod activation;
pub mod arithmetic;

use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::node::NodeId;
use crate::value::Value;

/// Builds the node `rule(operands)` on the first operand's tape.
///
/// All operands must be live nodes of the same tape.
pub(crate) fn apply_op(
    rule: BackwardOp,
    operands: &[&Value],
    op_name: &str,
) -> Result<Value, AutogradError> {
    let first = operands.first().ok_or_else(|| AutogradError::InvalidOperand {
        operation: op_name.to_string(),
        reason: "no operands".to_string(),
    })?;
    let tape = first.tape();

    let mut ids: Vec<NodeId> = Vec::with_capacity(operands.len());
    let mut values: Vec<f64> = Vec::with_capacity(operands.len());
    for operand in operands {
        if !operand.tape().same_tape(tape) {
            return Err(AutogradError::TapeMismatch {
                operation: op_name.to_string(),
            });
        }
        values.push(operand.try_read(|node| node.value)?);
        ids.push(operand.id());
    }

    let value = rule.forward(&values)?;
    let id = tape.push_op(value, &ids, rule);
    Ok(Value::from_parts(tape.clone(), id))
}

/// Applies a one-operand primitive.
pub(crate) fn apply_unary_op(
    a: &Value,
    rule: BackwardOp,
    op_name: &str,
) -> Result<Value, AutogradError> {
    apply_op(rule, &[a], op_name)
}

/// Applies a two-operand primitive, lifting a numeric `b` to a constant leaf first.
pub(crate) fn apply_binary_op(
    a: &Value,
    b: crate::value::Operand,
    rule: BackwardOp,
    op_name: &str,
) -> Result<Value, AutogradError> {
    // Validate `a` before lifting so a stale left operand does not grow the tape.
    a.try_read(|_| ())?;
    let b = b.lift(a, op_name)?;
    apply_op(rule, &[a, &b], op_name)
}
