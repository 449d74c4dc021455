use crate::error::ScalarGradError;
use crate::value::Value;
use approx::abs_diff_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("gradient check failed for input {input_index}: analytical {analytical} != numerical {numerical} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("input {input_index} requires grad but has no gradient after the backward pass")]
    MissingAnalyticalGrad { input_index: usize },

    #[error("function did not propagate requires_grad to its output")]
    RequiresGradNotPropagated,

    #[error("numerical gradient is not finite for input {input_index} (loss+: {loss_plus}, loss-: {loss_minus})")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("analytical gradient is not finite for input {input_index}: {value}")]
    AnalyticalGradNonFinite { input_index: usize, value: f64 },

    #[error("backward pass failed during gradient check: {0}")]
    BackwardPassError(#[from] ScalarGradError),
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` is called with one differentiable leaf per entry of `inputs` and
/// must return the scalar output node of the expression under test. The
/// analytical gradients come from one `backward()` pass; each numerical
/// estimate comes from two fresh rebuilds of the graph with one input
/// perturbed by ±`epsilon`.
///
/// The comparison accepts either an absolute difference within `tolerance`
/// or a relative difference within `tolerance`, so gradients of very
/// different magnitudes can share one call.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    // --- Analytical gradients: one pass over the unperturbed graph ---
    let leaves: Vec<Value> = inputs.iter().map(|&v| Value::new_with_grad(v)).collect();
    let output = func(&leaves);
    if !output.requires_grad() {
        return Err(GradCheckError::RequiresGradNotPropagated);
    }
    output.backward()?;

    for (i, leaf) in leaves.iter().enumerate() {
        let analytical = leaf
            .grad()
            .ok_or(GradCheckError::MissingAnalyticalGrad { input_index: i })?;
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNonFinite {
                input_index: i,
                value: analytical,
            });
        }

        // --- Numerical gradient: central difference on rebuilt graphs ---
        let loss_plus = eval_perturbed(&func, inputs, i, epsilon);
        let loss_minus = eval_perturbed(&func, inputs, i, -epsilon);
        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical - numerical).abs();
        let relative = difference / (analytical.abs() + epsilon);
        if !abs_diff_eq!(analytical, numerical, epsilon = tolerance) && relative > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical,
                numerical,
                difference,
            });
        }
    }

    Ok(())
}

/// Evaluates `func` on a fresh set of leaves with `inputs[index]` shifted by
/// `delta`. The perturbed leaves are plain constants: only the forward value
/// matters here.
fn eval_perturbed<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> f64
where
    F: Fn(&[Value]) -> Value,
{
    let leaves: Vec<Value> = inputs
        .iter()
        .enumerate()
        .map(|(j, &v)| {
            let v = if j == index { v + delta } else { v };
            Value::new(v)
        })
        .collect();
    func(&leaves).data()
}
