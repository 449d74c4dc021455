use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::ops::OpKind;
use crate::value::Value;
use log::{trace, warn};

impl Value {
    /// Checks if this node requires gradient computation.
    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// Sets the `requires_grad` flag for this node.
    ///
    /// Meaningful on leaves. Derived nodes inherit the flag from their
    /// operands at construction time; flipping it afterwards on a non-leaf
    /// changes whether *this* node accumulates gradient, but not whether the
    /// graph below it was recorded.
    pub fn set_requires_grad(&self, requires_grad: bool) {
        let mut guard = self.write_data();
        if requires_grad && guard.op.is_some() {
            warn!("set_requires_grad(true) on a non-leaf node; its operands were recorded with the original flag");
        }
        guard.requires_grad = requires_grad;
    }

    /// Returns the accumulated gradient, or `None` if no backward pass has
    /// touched this node yet. `Some(0.0)` means contributions summed to
    /// exactly zero, which is a different state from "never touched".
    pub fn grad(&self) -> Option<f64> {
        self.read_data().grad
    }

    /// Returns the operator that produced this node, if any.
    pub fn op(&self) -> Option<OpKind> {
        self.read_data().op
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node's gradient to `1.0` (d(self)/d(self)) when unset, then
    /// walks the reachable subgraph in reverse-topological order, applying
    /// each derived node's chain-rule step exactly once. A node's rule runs
    /// only after every reachable node referencing it as an operand has run
    /// its own rule, so gradient mass flowing through shared subexpressions
    /// is fully accumulated before it is propagated further.
    ///
    /// Calling this on a node with `requires_grad == false` is a no-op:
    /// there is nothing to differentiate.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::AlreadyDifferentiated`] when the pass
    /// reaches a node whose rule already ran (a second `backward()` without
    /// an intervening [`Value::zero_grad`]), and
    /// [`ScalarGradError::InvalidArity`] on a corrupted graph.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        if !self.requires_grad() {
            return Ok(());
        }

        let sorted = topological_sort(self);
        trace!("backward pass over {} reachable node(s)", sorted.len());

        {
            let mut guard = self.write_data();
            if guard.grad.is_none() {
                guard.grad = Some(1.0);
            }
        }

        for node in sorted.iter().rev() {
            let (op, cum_grad, done) = {
                let guard = node.read_data();
                match (guard.op, guard.grad) {
                    (Some(op), Some(grad)) => (op, grad, guard.backward_done),
                    // Leaves never run a rule; a derived node with no
                    // accumulated gradient received no contribution (its
                    // whole upward fan-in is gradient-free).
                    _ => continue,
                }
            };

            if done {
                return Err(ScalarGradError::AlreadyDifferentiated);
            }

            op.backward(node, cum_grad)?;
            node.write_data().backward_done = true;
        }

        Ok(())
    }

    /// Clears the gradient state of every node reachable from this one,
    /// preparing the graph for an independent `backward()` call.
    ///
    /// Gradients are reset to "unset" (`None`) on nodes that require
    /// gradient; nodes with `requires_grad == false` never held one. The
    /// walk goes *through* non-gradient nodes, since they can still have
    /// gradient-requiring ancestors.
    pub fn zero_grad(&self) {
        let reachable = topological_sort(self);
        trace!("zero_grad over {} reachable node(s)", reachable.len());

        for node in reachable {
            let mut guard = node.write_data();
            guard.backward_done = false;
            if guard.requires_grad {
                guard.grad = None;
            }
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
