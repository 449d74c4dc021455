// src/value_data.rs

use crate::ops::OpKind;
use crate::value::Value;

/// Internal storage and metadata for a graph node.
///
/// This struct holds the computed scalar, the gradient accumulator, and the
/// autograd bookkeeping. It is wrapped in `Rc<RefCell<ValueData>>` by the
/// [`Value`] handle to allow shared ownership (one node can be the operand of
/// several derived nodes) and interior mutability (gradients are accumulated
/// in place through immutable handles).
#[derive(Debug)]
pub struct ValueData {
    /// The computed scalar. Never changes after construction.
    pub(crate) data: f64,

    // --- Autograd metadata ---
    /// Accumulated gradient d(output)/d(this), populated during the backward
    /// pass. `None` means "never touched", which is distinct from
    /// `Some(0.0)` ("touched, accumulated to exactly zero").
    pub(crate) grad: Option<f64>,
    /// If false, this node never receives or propagates gradient
    /// contributions, even when it is reachable from the backward root.
    pub(crate) requires_grad: bool,
    /// The inputs that produced this node (0, 1 or 2 handles). Empty for
    /// leaves. Holding strong handles keeps every operand alive for as long
    /// as any derived node references it.
    pub(crate) operands: Vec<Value>,
    /// The operator that produced this node; `None` for leaves.
    pub(crate) op: Option<OpKind>,
    /// Set once this node's backward rule has run, so a second pass over the
    /// same graph is detected instead of double-counting gradients.
    pub(crate) backward_done: bool,
}

impl ValueData {
    /// Creates storage for a leaf node (user-supplied scalar, no operands).
    pub fn new(data: f64, requires_grad: bool) -> Self {
        ValueData {
            data,
            grad: None,
            requires_grad,
            operands: Vec::new(),
            op: None,
            backward_done: false,
        }
    }

    /// Creates storage for a derived node. `requires_grad` is inherited as
    /// the logical OR of the operand flags.
    pub(crate) fn from_op(data: f64, operands: Vec<Value>, op: OpKind) -> Self {
        let requires_grad = operands.iter().any(|v| v.requires_grad());
        ValueData {
            data,
            grad: None,
            requires_grad,
            operands,
            op: Some(op),
            backward_done: false,
        }
    }
}
