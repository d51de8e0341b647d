use crate::autograd::BackwardOp;

/// Stable identifier of a node inside a [`Tape`](crate::tape::Tape).
///
/// `index` is the arena slot. `generation` is the tape generation the node was created in;
/// it lets the tape tell a live handle apart from one whose node was discarded by a rewind
/// and whose slot has since been reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u64,
}

impl NodeId {
    /// Arena slot of the node. Parents always have a smaller index than their children.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// The ordered, fixed-size parent list of a node (0, 1 or 2 entries for the primitive set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parents {
    ids: [NodeId; 2],
    len: usize,
}

impl Parents {
    const UNUSED: NodeId = NodeId {
        index: 0,
        generation: 0,
    };

    pub(crate) fn none() -> Self {
        Parents {
            ids: [Self::UNUSED; 2],
            len: 0,
        }
    }

    pub(crate) fn one(a: NodeId) -> Self {
        Parents {
            ids: [a, Self::UNUSED],
            len: 1,
        }
    }

    pub(crate) fn two(a: NodeId, b: NodeId) -> Self {
        Parents { ids: [a, b], len: 2 }
    }

    pub(crate) fn from_slice(ids: &[NodeId]) -> Self {
        match *ids {
            [] => Self::none(),
            [a] => Self::one(a),
            [a, b, ..] => Self::two(a, b),
        }
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.ids[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// One slot of the arena: a scalar, its gradient accumulator and how it was produced.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) parents: Parents,
    /// Diagnostic label of the producing primitive ("" for leaves, "const" for lifted constants).
    pub(crate) op: &'static str,
    pub(crate) rule: BackwardOp,
    pub(crate) generation: u64,
}

impl Node {
    pub(crate) fn leaf(value: f64, op: &'static str, generation: u64) -> Self {
        Node {
            value,
            grad: 0.0,
            parents: Parents::none(),
            op,
            rule: BackwardOp::Leaf,
            generation,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn parents(&self) -> &Parents {
        &self.parents
    }

    pub fn op(&self) -> &'static str {
        self.op
    }

    pub fn rule(&self) -> BackwardOp {
        self.rule
    }

    pub fn is_leaf(&self) -> bool {
        self.parents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(index: usize) -> NodeId {
        NodeId {
            index,
            generation: 0,
        }
    }

    #[test]
    fn test_parents_from_slice() {
        assert!(Parents::from_slice(&[]).is_empty());
        assert_eq!(Parents::from_slice(&[id(3)]).as_slice(), &[id(3)]);
        let two = Parents::from_slice(&[id(1), id(1)]);
        assert_eq!(two.len(), 2);
        assert_eq!(two.as_slice(), &[id(1), id(1)]);
    }

    #[test]
    fn test_leaf_node_defaults() {
        let node = Node::leaf(2.5, "", 0);
        assert_eq!(node.value(), 2.5);
        assert_eq!(node.grad(), 0.0);
        assert!(node.is_leaf());
        assert_eq!(node.rule(), BackwardOp::Leaf);
    }
}
