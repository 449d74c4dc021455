// scalargrad-core/src/ops/math_elem/sqrt.rs

use crate::autograd::accumulate_gradient;
use crate::error::ScalarGradError;
use crate::ops::{unary_operand, OpKind};
use crate::value::Value;

// --- Forward Operation ---

/// Computes the square root of a node, recording the operation for the
/// backward pass.
///
/// A negative input yields `NaN` per IEEE 754 rather than an error, and the
/// backward rule at zero divides by zero (`inf`); callers inspect
/// non-finite values themselves.
pub fn sqrt_op(a: &Value) -> Value {
    Value::from_op(a.data().sqrt(), vec![a.clone()], OpKind::Sqrt)
}

impl Value {
    /// Returns `√self` with gradient tracking.
    pub fn sqrt(&self) -> Value {
        sqrt_op(self)
    }
}

// --- Backward Operation ---

/// d(√a)/da = 1/(2·√a) = 1/(2·y), reusing this node's own output.
pub(crate) fn backward(node: &Value, cum_grad: f64) -> Result<(), ScalarGradError> {
    let a = unary_operand(node, OpKind::Sqrt)?;
    accumulate_gradient(&a, cum_grad / (2.0 * node.data()));
    Ok(())
}

// --- Tests ---

#[cfg(test)]
#[path = "sqrt_test.rs"]
mod tests;
