use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::node::{Node, NodeId, Parents};
use crate::value::Value;
use log::debug;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TAPE_ID: AtomicU64 = AtomicU64::new(0);

/// Arena owning every node of one computation graph.
///
/// Nodes are addressed by [`NodeId`] and refer to their parents by id, so sharing a node
/// between many consumers never creates reference cycles. A `Tape` is a cheap handle
/// (`Rc`); clones refer to the same arena.
///
/// Graphs are disposable: record a [`Checkpoint`] after creating the parameters, build and
/// differentiate a graph, then [`rewind`](Tape::rewind) to drop everything built since.
#[derive(Clone, Default)]
pub struct Tape {
    inner: Rc<RefCell<Arena>>,
}

/// The nodes themselves plus the current generation.
#[derive(Debug)]
pub(crate) struct Arena {
    pub(crate) nodes: Vec<Node>,
    generation: u64,
    /// Process-unique, identifies the tape a [`Checkpoint`] was taken on.
    id: u64,
}

impl Default for Arena {
    fn default() -> Self {
        Arena {
            nodes: Vec::new(),
            generation: 0,
            id: NEXT_TAPE_ID.fetch_add(1, Ordering::Relaxed),
        }
    }
}

/// Arena length recorded by [`Tape::checkpoint`], bound to the tape it was taken on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    len: usize,
    tape: u64,
}

impl Checkpoint {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Arena {
    pub(crate) fn check(&self, id: NodeId) -> Result<&Node, AutogradError> {
        match self.nodes.get(id.index) {
            Some(node) if node.generation == id.generation => Ok(node),
            _ => Err(AutogradError::StaleNode { index: id.index }),
        }
    }

    pub(crate) fn check_mut(&mut self, id: NodeId) -> Result<&mut Node, AutogradError> {
        match self.nodes.get_mut(id.index) {
            Some(node) if node.generation == id.generation => Ok(node),
            _ => Err(AutogradError::StaleNode { index: id.index }),
        }
    }

    fn push(&mut self, mut node: Node) -> NodeId {
        node.generation = self.generation;
        let id = NodeId {
            index: self.nodes.len(),
            generation: self.generation,
        };
        self.nodes.push(node);
        id
    }
}

impl Tape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a leaf node (input, weight or bias) holding `value`, with a zero gradient.
    pub fn leaf(&self, value: f64) -> Value {
        let id = self.arena_mut().push(Node::leaf(value, "", 0));
        Value::from_parts(self.clone(), id)
    }

    /// Creates a constant leaf. This is the node every raw number is lifted to when it is
    /// mixed with a [`Value`] in an operation.
    pub fn constant(&self, value: f64) -> Value {
        let id = self.arena_mut().push(Node::leaf(value, "const", 0));
        Value::from_parts(self.clone(), id)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.arena().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn checkpoint(&self) -> Checkpoint {
        let arena = self.arena();
        Checkpoint {
            len: arena.nodes.len(),
            tape: arena.id,
        }
    }

    /// Discards every node created after `checkpoint`.
    ///
    /// Nodes created before it keep their ids, values and gradients. Handles to discarded
    /// nodes become stale, even if their slots are reused later.
    ///
    /// # Errors
    /// [`AutogradError::TapeMismatch`] if `checkpoint` was taken on another tape,
    /// [`AutogradError::InvalidCheckpoint`] if it lies past the end of this one.
    pub fn rewind(&self, checkpoint: Checkpoint) -> Result<(), AutogradError> {
        let mut arena = self.arena_mut();
        if checkpoint.tape != arena.id {
            return Err(AutogradError::TapeMismatch {
                operation: "rewind".to_string(),
            });
        }
        let len = arena.nodes.len();
        if checkpoint.len > len {
            return Err(AutogradError::InvalidCheckpoint {
                checkpoint: checkpoint.len,
                len,
            });
        }
        arena.nodes.truncate(checkpoint.len);
        arena.generation += 1;
        debug!(
            "Tape rewound from {} to {} nodes (generation {})",
            len, checkpoint.len, arena.generation
        );
        Ok(())
    }

    /// Resets the gradient of every live node to 0.
    pub fn zero_grad(&self) {
        for node in self.arena_mut().nodes.iter_mut() {
            node.grad = 0.0;
        }
    }

    /// `true` when both handles refer to the same arena.
    pub fn same_tape(&self, other: &Tape) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// `true` when `id` refers to a live node of this tape.
    pub fn contains(&self, id: NodeId) -> bool {
        self.arena().check(id).is_ok()
    }

    pub(crate) fn push_op(
        &self,
        value: f64,
        parents: &[NodeId],
        rule: BackwardOp,
    ) -> NodeId {
        self.arena_mut().push(Node {
            value,
            grad: 0.0,
            parents: Parents::from_slice(parents),
            op: rule.label(),
            rule,
            generation: 0,
        })
    }

    pub(crate) fn arena(&self) -> Ref<'_, Arena> {
        self.inner.borrow()
    }

    pub(crate) fn arena_mut(&self) -> RefMut<'_, Arena> {
        self.inner.borrow_mut()
    }
}

impl fmt::Debug for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arena = self.arena();
        f.debug_struct("Tape")
            .field("len", &arena.nodes.len())
            .field("generation", &arena.generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_and_constant() {
        let tape = Tape::new();
        assert!(tape.is_empty());
        let x = tape.leaf(3.0);
        let c = tape.constant(-1.0);
        assert_eq!(tape.len(), 2);
        assert_eq!(x.value(), 3.0);
        assert_eq!(x.op(), "");
        assert_eq!(c.op(), "const");
        assert!(x.is_leaf() && c.is_leaf());
    }

    #[test]
    fn test_rewind_keeps_earlier_nodes() -> Result<(), AutogradError> {
        let tape = Tape::new();
        let w = tape.leaf(0.5);
        let mark = tape.checkpoint();
        let y = w.mul(2.0)?;
        y.backprop()?;
        assert_eq!(w.grad(), 2.0);

        tape.rewind(mark)?;
        assert_eq!(tape.len(), 1);
        assert!(tape.contains(w.id()));
        assert_eq!(w.value(), 0.5);
        assert_eq!(w.grad(), 2.0);
        assert!(y.is_stale());
        Ok(())
    }

    #[test]
    fn test_reused_slot_does_not_revive_stale_handle() -> Result<(), AutogradError> {
        let tape = Tape::new();
        let mark = tape.checkpoint();
        let old = tape.leaf(1.0);
        tape.rewind(mark)?;
        let new = tape.leaf(2.0);
        assert_eq!(old.id().index(), new.id().index());
        assert!(old.is_stale());
        assert!(!new.is_stale());
        assert_eq!(
            old.add(&new).unwrap_err(),
            AutogradError::StaleNode { index: 0 }
        );
        Ok(())
    }

    #[test]
    fn test_rewind_past_end_fails() -> Result<(), AutogradError> {
        let tape = Tape::new();
        tape.leaf(1.0);
        tape.leaf(2.0);
        let mark = tape.checkpoint();
        tape.rewind(Checkpoint {
            len: 0,
            ..mark
        })?;
        assert_eq!(
            tape.rewind(mark),
            Err(AutogradError::InvalidCheckpoint {
                checkpoint: 2,
                len: 0
            })
        );
        Ok(())
    }

    #[test]
    fn test_rewind_rejects_foreign_checkpoint() -> Result<(), AutogradError> {
        let (a, b) = (Tape::new(), Tape::new());
        let foreign = a.checkpoint();
        let w = b.leaf(1.5);
        assert_eq!(
            b.rewind(foreign),
            Err(AutogradError::TapeMismatch {
                operation: "rewind".to_string()
            })
        );
        assert_eq!(b.len(), 1);
        assert!(!w.is_stale());
        assert_eq!(w.value(), 1.5);

        // Clones share the arena, so their checkpoints are interchangeable.
        let c = b.clone();
        let mark = c.checkpoint();
        b.leaf(2.0);
        b.rewind(mark)?;
        assert_eq!(c.len(), 1);
        Ok(())
    }

    #[test]
    fn test_tape_zero_grad() -> Result<(), AutogradError> {
        let tape = Tape::new();
        let a = tape.leaf(2.0);
        let b = a.mul(&a)?;
        b.backprop()?;
        assert_eq!(a.grad(), 4.0);
        tape.zero_grad();
        assert_eq!(a.grad(), 0.0);
        assert_eq!(b.grad(), 0.0);
        Ok(())
    }

    #[test]
    fn test_same_tape() {
        let t1 = Tape::new();
        let t2 = Tape::new();
        assert!(t1.same_tape(&t1.clone()));
        assert!(!t1.same_tape(&t2));
    }
}
