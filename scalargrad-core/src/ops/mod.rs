//! # Scalar operations module (`ops`)
//!
//! Central hub for the operator set of the computation graph.
//!
//! ## Structure:
//!
//! - **Submodules:** operations are grouped by family (`arithmetic` for the
//!   overloadable operators, `math_elem` for element-wise math functions).
//! - **`_op` functions:** each operation has a construction function (e.g.
//!   `add_op`) that computes the forward value and records the operands and
//!   operator kind on the new node. The `std::ops` overloads and the `Value`
//!   methods all funnel through these.
//! - **Backward rules:** each operation's file also holds its chain-rule
//!   step, dispatched through [`OpKind::backward`]. Rules accumulate
//!   `operand.grad += local_derivative * cum_grad` for gradient-requiring
//!   operands and skip the rest.

pub mod arithmetic;
pub mod math_elem;

use crate::error::ScalarGradError;
use crate::value::Value;

/// The closed set of operator kinds.
///
/// Every derived node records the `OpKind` that produced it; the backward
/// pass dispatches on the tag to run the matching chain-rule step. A single
/// shared enum (rather than per-operator trait objects) keeps the operators
/// stateless and the dispatch a plain `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Sqrt,
}

impl OpKind {
    /// Human-readable operator name, used in diagnostics and errors.
    pub fn name(self) -> &'static str {
        match self {
            OpKind::Neg => "Neg",
            OpKind::Add => "Add",
            OpKind::Sub => "Sub",
            OpKind::Mul => "Mul",
            OpKind::Div => "Div",
            OpKind::Pow => "Pow",
            OpKind::Sqrt => "Sqrt",
        }
    }

    /// Number of operands the operator consumes.
    pub fn arity(self) -> usize {
        match self {
            OpKind::Neg | OpKind::Sqrt => 1,
            OpKind::Add | OpKind::Sub | OpKind::Mul | OpKind::Div | OpKind::Pow => 2,
        }
    }

    /// Runs this operator's chain-rule step for `node`, whose accumulated
    /// gradient is `cum_grad`, pushing contributions onto its operands.
    pub(crate) fn backward(self, node: &Value, cum_grad: f64) -> Result<(), ScalarGradError> {
        match self {
            OpKind::Neg => arithmetic::neg::backward(node, cum_grad),
            OpKind::Add => arithmetic::add::backward(node, cum_grad),
            OpKind::Sub => arithmetic::sub::backward(node, cum_grad),
            OpKind::Mul => arithmetic::mul::backward(node, cum_grad),
            OpKind::Div => arithmetic::div::backward(node, cum_grad),
            OpKind::Pow => arithmetic::pow::backward(node, cum_grad),
            OpKind::Sqrt => math_elem::sqrt::backward(node, cum_grad),
        }
    }
}

/// Extracts the single operand of a unary node, or fails with `InvalidArity`
/// when the recorded operand count does not match the operator's arity.
pub(crate) fn unary_operand(node: &Value, op: OpKind) -> Result<Value, ScalarGradError> {
    let guard = node.read_data();
    match guard.operands.as_slice() {
        [a] => Ok(a.clone()),
        operands => Err(ScalarGradError::InvalidArity {
            operator: op.name(),
            expected: 1,
            actual: operands.len(),
        }),
    }
}

/// Extracts both operands of a binary node, or fails with `InvalidArity`.
pub(crate) fn binary_operands(node: &Value, op: OpKind) -> Result<(Value, Value), ScalarGradError> {
    let guard = node.read_data();
    match guard.operands.as_slice() {
        [a, b] => Ok((a.clone(), b.clone())),
        operands => Err(ScalarGradError::InvalidArity {
            operator: op.name(),
            expected: 2,
            actual: operands.len(),
        }),
    }
}
