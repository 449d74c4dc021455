use crate::autograd::accumulate_gradient;
use crate::error::ScalarGradError;
use crate::ops::{binary_operands, OpKind};
use crate::value::Value;
use std::ops::Div;

// --- Forward Operation ---

/// Divides `a` by `b`, recording the operation for the backward pass.
///
/// Division by zero is not an error: the result is `inf`/`NaN` per IEEE 754,
/// both here and in the backward rule. Callers inspecting values or
/// gradients handle non-finite numbers themselves.
pub fn div_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() / b.data(), vec![a.clone(), b.clone()], OpKind::Div)
}

impl Div for &Value {
    type Output = Value;

    fn div(self, rhs: &Value) -> Value {
        div_op(self, rhs)
    }
}

impl Div<f64> for &Value {
    type Output = Value;

    fn div(self, rhs: f64) -> Value {
        div_op(self, &Value::new(rhs))
    }
}

impl Div<&Value> for f64 {
    type Output = Value;

    fn div(self, rhs: &Value) -> Value {
        div_op(&Value::new(self), rhs)
    }
}

// --- Backward Operation ---

/// d(a/b)/da = 1/b, d(a/b)/db = -a/b².
pub(crate) fn backward(node: &Value, cum_grad: f64) -> Result<(), ScalarGradError> {
    let (a, b) = binary_operands(node, OpKind::Div)?;
    let (a_data, b_data) = (a.data(), b.data());
    accumulate_gradient(&a, cum_grad / b_data);
    accumulate_gradient(&b, -a_data / (b_data * b_data) * cum_grad);
    Ok(())
}

// --- Tests ---

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
