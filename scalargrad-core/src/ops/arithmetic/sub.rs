use crate::autograd::accumulate_gradient;
use crate::error::ScalarGradError;
use crate::ops::{binary_operands, OpKind};
use crate::value::Value;
use std::ops::Sub;

// --- Forward Operation ---

/// Subtracts `b` from `a`, recording the operation for the backward pass.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() - b.data(), vec![a.clone(), b.clone()], OpKind::Sub)
}

impl Sub for &Value {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        sub_op(self, rhs)
    }
}

impl Sub<f64> for &Value {
    type Output = Value;

    fn sub(self, rhs: f64) -> Value {
        sub_op(self, &Value::new(rhs))
    }
}

impl Sub<&Value> for f64 {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        sub_op(&Value::new(self), rhs)
    }
}

// --- Backward Operation ---

/// d(a-b)/da = 1, d(a-b)/db = -1.
pub(crate) fn backward(node: &Value, cum_grad: f64) -> Result<(), ScalarGradError> {
    let (a, b) = binary_operands(node, OpKind::Sub)?;
    accumulate_gradient(&a, cum_grad);
    accumulate_gradient(&b, -cum_grad);
    Ok(())
}

// --- Tests ---

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
