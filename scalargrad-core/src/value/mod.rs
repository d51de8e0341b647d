//! The user-facing node handle.

mod autograd_methods;

use crate::error::AutogradError;
use crate::node::{Node, NodeId};
use crate::tape::Tape;
use std::fmt;

/// Handle to one scalar node of a [`Tape`].
///
/// Cloning a `Value` clones the handle, not the node: both clones read and accumulate into
/// the same gradient. Operations (`add`, `mul`, `pow`, `relu`, ...) append a new node to the
/// tape and return its handle.
///
/// Reading accessors ([`value`](Value::value), [`grad`](Value::grad), [`op`](Value::op))
/// panic when the node was discarded by [`Tape::rewind`], the same way indexing past the end
/// of a slice does. Operations report that case as [`AutogradError::StaleNode`].
#[derive(Clone)]
pub struct Value {
    tape: Tape,
    id: NodeId,
}

/// Right-hand operand of a binary operation: a node, or a raw number to be lifted.
///
/// A `Constant` is turned into a constant leaf on the left operand's tape
/// ([`Tape::constant`]). This is the only implicit conversion between numbers and nodes.
#[derive(Debug, Clone)]
pub enum Operand {
    Node(Value),
    Constant(f64),
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Constant(value)
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Node(value)
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Node(value.clone())
    }
}

impl Operand {
    /// Resolves the operand to a node on `anchor`'s tape.
    pub(crate) fn lift(self, anchor: &Value, operation: &str) -> Result<Value, AutogradError> {
        match self {
            Operand::Node(node) => {
                if !node.tape.same_tape(&anchor.tape) {
                    return Err(AutogradError::TapeMismatch {
                        operation: operation.to_string(),
                    });
                }
                Ok(node)
            }
            Operand::Constant(c) => Ok(anchor.tape.constant(c)),
        }
    }
}

impl Value {
    pub(crate) fn from_parts(tape: Tape, id: NodeId) -> Self {
        Value { tape, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Forward value.
    ///
    /// # Panics
    /// Panics if the node was discarded by a tape rewind.
    pub fn value(&self) -> f64 {
        self.read(|node| node.value)
    }

    /// Diagnostic label of the primitive that produced this node.
    ///
    /// # Panics
    /// Panics if the node was discarded by a tape rewind.
    pub fn op(&self) -> &'static str {
        self.read(|node| node.op)
    }

    /// # Panics
    /// Panics if the node was discarded by a tape rewind.
    pub fn is_leaf(&self) -> bool {
        self.read(Node::is_leaf)
    }

    /// Handles to the direct parents, in operand order.
    ///
    /// # Panics
    /// Panics if the node was discarded by a tape rewind.
    pub fn parents(&self) -> Vec<Value> {
        let ids: Vec<NodeId> = self.read(|node| node.parents.as_slice().to_vec());
        ids.into_iter()
            .map(|id| Value::from_parts(self.tape.clone(), id))
            .collect()
    }

    /// `true` once the node has been discarded by a tape rewind.
    pub fn is_stale(&self) -> bool {
        !self.tape.contains(self.id)
    }

    /// `true` when both handles refer to the same node.
    pub fn same_node(&self, other: &Value) -> bool {
        self.id == other.id && self.tape.same_tape(&other.tape)
    }

    /// Overwrites the value of a leaf.
    ///
    /// This is the external parameter update (`value -= lr * grad`); it is outside the graph
    /// and is refused for nodes with parents.
    pub fn set_value(&self, value: f64) -> Result<(), AutogradError> {
        let mut arena = self.tape.arena_mut();
        let node = arena.check_mut(self.id)?;
        if !node.is_leaf() {
            return Err(AutogradError::NonLeafMutation {
                index: self.id.index,
                op: node.op.to_string(),
            });
        }
        node.value = value;
        Ok(())
    }

    pub(crate) fn try_read<R>(&self, f: impl FnOnce(&Node) -> R) -> Result<R, AutogradError> {
        let arena = self.tape.arena();
        arena.check(self.id).map(f)
    }

    fn read<R>(&self, f: impl FnOnce(&Node) -> R) -> R {
        match self.try_read(f) {
            Ok(r) => r,
            Err(e) => panic!("Cannot read node: {}", e),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_read(|node| (node.value, node.grad, node.op)) {
            Ok((value, grad, op)) => f
                .debug_struct("Value")
                .field("index", &self.id.index)
                .field("value", &value)
                .field("grad", &grad)
                .field("op", &op)
                .finish(),
            Err(_) => write!(f, "Value(<stale node {}>)", self.id.index),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_read(|node| (node.value, node.grad)) {
            Ok((value, grad)) => write!(f, "Value(v={}, grad={})", value, grad),
            Err(_) => write!(f, "Value(<stale>)"),
        }
    }
}
