use super::Value;
use crate::autograd::graph::topological_order;
use crate::error::AutogradError;
use log::{debug, trace};

impl Value {
    /// Accumulated gradient of the last backward pass(es) that reached this node.
    ///
    /// # Panics
    /// Panics if the node was discarded by a tape rewind.
    pub fn grad(&self) -> f64 {
        match self.try_read(|node| node.grad) {
            Ok(grad) => grad,
            Err(e) => panic!("Cannot read gradient: {}", e),
        }
    }

    /// Resets this node's gradient to 0.
    pub fn zero_grad(&self) -> Result<(), AutogradError> {
        let mut arena = self.tape().arena_mut();
        arena.check_mut(self.id())?.grad = 0.0;
        Ok(())
    }

    /// Runs the backward pass from this node.
    ///
    /// Seeds ∂self/∂self = 1 and walks every reachable node in reverse-topological order
    /// (see `autograd::graph`). Each node's complete gradient for this pass is added to its
    /// stored `grad` before its rule pushes contributions to its parents, so stored
    /// gradients are only ever added to.
    ///
    /// Gradients from successive calls accumulate: running `backprop` twice without
    /// resetting (`Module::zero_grad`, `Tape::zero_grad`) doubles every gradient reachable
    /// from this node. Resetting between optimisation steps is the caller's job.
    pub fn backprop(&self) -> Result<(), AutogradError> {
        let mut arena = self.tape().arena_mut();
        arena.check(self.id())?;
        let root = self.id().index;

        let order = topological_order(&arena.nodes, root);
        let mut pass_grads = vec![0.0f64; root + 1];
        pass_grads[root] = 1.0;

        for &index in &order {
            let upstream = pass_grads[index];
            let node = &mut arena.nodes[index];
            node.grad += upstream;

            let parents = node.parents;
            let (rule, result) = (node.rule, node.value);
            let mut operands = [0.0f64; 2];
            for (slot, parent) in operands.iter_mut().zip(parents.as_slice()) {
                *slot = arena.nodes[parent.index].value;
            }
            let contributions = rule.propagate(&operands[..parents.len()], result, upstream)?;
            trace!(
                "[backprop] node {} ({:?}) upstream {} -> {:?}",
                index,
                rule,
                upstream,
                &contributions[..parents.len()]
            );
            for (parent, contribution) in parents.as_slice().iter().zip(contributions) {
                pass_grads[parent.index] += contribution;
            }
        }

        debug!(
            "Backward pass from node {} visited {} nodes",
            root,
            order.len()
        );
        Ok(())
    }
}
