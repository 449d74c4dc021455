use crate::autograd::accumulate_gradient;
use crate::error::ScalarGradError;
use crate::ops::{binary_operands, OpKind};
use crate::value::Value;
use std::ops::Mul;

// --- Forward Operation ---

/// Multiplies two nodes, recording the operation for the backward pass.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() * b.data(), vec![a.clone(), b.clone()], OpKind::Mul)
}

impl Mul for &Value {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        mul_op(self, rhs)
    }
}

impl Mul<f64> for &Value {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        mul_op(self, &Value::new(rhs))
    }
}

impl Mul<&Value> for f64 {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        mul_op(&Value::new(self), rhs)
    }
}

// --- Backward Operation ---

/// d(a·b)/da = b, d(a·b)/db = a. When both sides are the same node
/// (`x * x`), the two contributions accumulate on it in turn.
pub(crate) fn backward(node: &Value, cum_grad: f64) -> Result<(), ScalarGradError> {
    let (a, b) = binary_operands(node, OpKind::Mul)?;
    let (a_data, b_data) = (a.data(), b.data());
    accumulate_gradient(&a, b_data * cum_grad);
    accumulate_gradient(&b, a_data * cum_grad);
    Ok(())
}

// --- Tests ---

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
