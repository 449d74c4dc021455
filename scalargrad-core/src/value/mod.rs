// src/value/mod.rs

use crate::autograd::graph::NodeId;
use crate::ops::OpKind;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd_methods;
mod debug;
mod traits;

/// Handle to one scalar node in the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared ownership:** a node may be the operand of several derived
///     nodes (the graph is a DAG, not a tree); cloning a `Value` only bumps
///     the reference count.
/// 2.  **Interior mutability:** gradients are accumulated in place through
///     immutable handles during the backward pass.
///
/// The engine is single-threaded by contract; `Rc`/`RefCell` make that
/// explicit (`Value` is neither `Send` nor `Sync`).
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node holding `data`, excluded from differentiation.
    ///
    /// Bare scalars mixed into arithmetic expressions are promoted through
    /// this constructor, so literals never allocate a gradient slot.
    pub fn new(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::new(data, false))),
        }
    }

    /// Creates a leaf node holding `data` that participates in
    /// differentiation: the backward pass accumulates d(output)/d(this) into
    /// its gradient slot.
    pub fn new_with_grad(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::new(data, true))),
        }
    }

    /// Creates a derived node recording its operands and operator kind.
    /// Called by the operation constructors in `ops`; not part of the public
    /// surface because arbitrary operand lists could violate operator arity.
    pub(crate) fn from_op(data: f64, operands: Vec<Value>, op: OpKind) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::from_op(data, operands, op))),
        }
    }

    /// Returns the computed scalar.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// True for nodes created directly from a scalar (no producing operator).
    pub fn is_leaf(&self) -> bool {
        self.read_data().op.is_none()
    }

    /// Number of operands recorded on this node (0 for leaves).
    pub fn operand_count(&self) -> usize {
        self.read_data().operands.len()
    }

    /// Immutably borrows the node storage.
    ///
    /// The borrow is released when the guard goes out of scope. Panics if the
    /// storage is already mutably borrowed.
    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Mutably borrows the node storage.
    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Stable identity of this node, used as a key during graph traversal.
    /// Valid for as long as any handle to the node is alive.
    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }
}
