// src/value/debug.rs

use crate::value::Value;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::fmt::Write as _;

// Manual implementation so a node prints as a one-line summary instead of
// recursing through its operand handles.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(
            f,
            "Value(data={}, requires_grad={}, grad={}, op={}, operands={})",
            guard.data,
            guard.requires_grad,
            match guard.grad {
                Some(g) => g.to_string(),
                None => "unset".to_string(),
            },
            guard.op.map_or("None", |op| op.name()),
            guard.operands.len(),
        )
    }
}

impl Value {
    /// Renders every node reachable from this one, breadth-first, one line
    /// per node: value, gradient (or "unset"), operator name if any, and
    /// operand count.
    ///
    /// Diagnostic only — the traversal order here carries no semantic
    /// meaning, unlike the backward pass.
    pub fn graph_summary(&self) -> String {
        let mut out = String::new();
        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();

        queue.push_back(self.clone());
        visited.insert(self.node_id());

        while let Some(node) = queue.pop_front() {
            let _ = writeln!(out, "{:?}", node);
            for operand in node.read_data().operands.iter() {
                if visited.insert(operand.node_id()) {
                    queue.push_back(operand.clone());
                }
            }
        }
        out
    }
}
