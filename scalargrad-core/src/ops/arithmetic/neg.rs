use crate::autograd::accumulate_gradient;
use crate::error::ScalarGradError;
use crate::ops::{unary_operand, OpKind};
use crate::value::Value;
use std::ops::Neg;

// --- Forward Operation ---

/// Negates a node, recording the operation for the backward pass.
pub fn neg_op(a: &Value) -> Value {
    Value::from_op(-a.data(), vec![a.clone()], OpKind::Neg)
}

/// Implements unary negation for a node handle.
impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

// --- Backward Operation ---

/// d(-a)/da = -1.
pub(crate) fn backward(node: &Value, cum_grad: f64) -> Result<(), ScalarGradError> {
    let a = unary_operand(node, OpKind::Neg)?;
    accumulate_gradient(&a, -cum_grad);
    Ok(())
}

// --- Tests ---

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
