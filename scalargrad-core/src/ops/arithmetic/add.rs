// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::accumulate_gradient;
use crate::error::ScalarGradError;
use crate::ops::{binary_operands, OpKind};
use crate::value::Value;
use std::ops::Add;

// --- Forward Operation ---

/// Adds two nodes, recording the operation for the backward pass.
///
/// The result requires gradient when either operand does.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() + b.data(), vec![a.clone(), b.clone()], OpKind::Add)
}

impl Add for &Value {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        add_op(self, rhs)
    }
}

impl Add<f64> for &Value {
    type Output = Value;

    fn add(self, rhs: f64) -> Value {
        add_op(self, &Value::new(rhs))
    }
}

impl Add<&Value> for f64 {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        add_op(&Value::new(self), rhs)
    }
}

// --- Backward Operation ---

/// d(a+b)/da = 1, d(a+b)/db = 1: the cumulative gradient flows to both
/// operands unchanged.
pub(crate) fn backward(node: &Value, cum_grad: f64) -> Result<(), ScalarGradError> {
    let (a, b) = binary_operands(node, OpKind::Add)?;
    accumulate_gradient(&a, cum_grad);
    accumulate_gradient(&b, cum_grad);
    Ok(())
}

// --- Tests ---

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
