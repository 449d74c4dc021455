use crate::value::Value;
use crate::value_data::ValueData;
use log::trace;
use std::cell::RefCell;
use std::collections::HashSet;

/// Stable node identity: the address of the node's shared storage cell.
/// Valid while any `Value` handle to the node is alive, which the traversal
/// guarantees by holding clones of every visited handle.
pub(crate) type NodeId = *const RefCell<ValueData>;

/// Builds a topological order of the subgraph reachable from `root`.
///
/// Depth-first post-order: a node is pushed only after all of its operands,
/// so every node appears *after* everything it depends on. The backward pass
/// consumes this list in reverse, which guarantees a node's chain-rule step
/// runs only once every reachable node using it as an operand has already
/// contributed to its gradient — the property that keeps shared
/// subexpressions from dropping gradient mass.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited = HashSet::new();
    let mut sorted = Vec::new();
    build_topo(root, &mut visited, &mut sorted);
    sorted
}

fn build_topo(node: &Value, visited: &mut HashSet<NodeId>, sorted: &mut Vec<Value>) {
    if !visited.insert(node.node_id()) {
        return;
    }
    trace!("build_topo: visiting node {:?}", node.node_id());

    // Clone the operand handles out of the cell so no borrow is held across
    // the recursion.
    let operands = node.read_data().operands.clone();
    for operand in &operands {
        build_topo(operand, visited, sorted);
    }
    sorted.push(node.clone());
}
