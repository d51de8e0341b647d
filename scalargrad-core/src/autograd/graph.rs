use crate::node::Node;
use log::trace;
use std::collections::VecDeque;

/// Reverse-topological order (root first) of every node reachable from `root`.
///
/// Kahn's algorithm over consumer counts restricted to the reachable subgraph: a node is
/// emitted only once every reachable node that uses it has been emitted. Parent edges are
/// counted per use, so a node appearing twice as a parent of the same child (`x * x`) is
/// released after both uses.
///
/// `nodes` is the arena and `root` must be a live index in it. Parents always precede
/// their children in the arena, so every reachable index is `<= root`.
pub(crate) fn topological_order(nodes: &[Node], root: usize) -> Vec<usize> {
    let mut pending = vec![0usize; root + 1];
    let mut reached = vec![false; root + 1];
    reached[root] = true;

    let mut stack = vec![root];
    while let Some(index) = stack.pop() {
        for parent in nodes[index].parents.as_slice() {
            pending[parent.index] += 1;
            if !reached[parent.index] {
                reached[parent.index] = true;
                stack.push(parent.index);
            }
        }
    }

    let mut order = Vec::new();
    let mut ready = VecDeque::from([root]);
    while let Some(index) = ready.pop_front() {
        trace!("[topological_order] emit node {}", index);
        order.push(index);
        for parent in nodes[index].parents.as_slice() {
            pending[parent.index] -= 1;
            if pending[parent.index] == 0 {
                ready.push_back(parent.index);
            }
        }
    }
    order
}
