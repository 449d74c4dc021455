// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::accumulate_gradient;
use crate::error::ScalarGradError;
use crate::ops::{binary_operands, OpKind};
use crate::value::Value;

// --- Forward Operation ---

/// Raises `a` to the power `b`, recording the operation for the backward
/// pass. Both base and exponent are graph nodes; either can carry gradient.
pub fn pow_op(a: &Value, b: &Value) -> Value {
    Value::from_op(
        a.data().powf(b.data()),
        vec![a.clone(), b.clone()],
        OpKind::Pow,
    )
}

impl Value {
    /// Returns `self ^ exponent` with both sides tracked in the graph.
    pub fn pow(&self, exponent: &Value) -> Value {
        pow_op(self, exponent)
    }

    /// Returns `self ^ exponent` for a bare scalar exponent, promoted to a
    /// non-gradient leaf. Named after `f64::powf`.
    pub fn powf(&self, exponent: f64) -> Value {
        pow_op(self, &Value::new(exponent))
    }
}

// --- Backward Operation ---

/// d(a^b)/da = b·a^(b-1), d(a^b)/db = a^b·ln(a).
///
/// `ln` of a non-positive base yields `NaN`/`-inf` per IEEE 754; the
/// non-finite contribution lands in the exponent's gradient only when the
/// exponent actually requires one, so the common scalar-exponent case
/// (`powf`) stays clean at negative bases.
pub(crate) fn backward(node: &Value, cum_grad: f64) -> Result<(), ScalarGradError> {
    let (a, b) = binary_operands(node, OpKind::Pow)?;
    let (a_data, b_data) = (a.data(), b.data());
    accumulate_gradient(&a, b_data * a_data.powf(b_data - 1.0) * cum_grad);
    accumulate_gradient(&b, node.data() * a_data.ln() * cum_grad);
    Ok(())
}

// --- Tests ---

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
