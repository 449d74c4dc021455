//! Two-feature linear regression trained through the scalar autograd graph.
//!
//! Each epoch builds a fresh quadratic-loss graph from the current parameter
//! values, backpropagates once, and applies `param -= lr * grad`. Parameters
//! live as plain floats between epochs; node values are immutable.
//!
//! Run with: `cargo run --example linear_regression`

use scalargrad_core::{ScalarGradError, Value};

/// Rows of (x0, x1, y), generated by y = 3*x0 + 4*x1 + 3.
const DATASET: [(f64, f64, f64); 5] = [
    (1.0, 2.0, 14.0),
    (2.0, 1.0, 13.0),
    (3.0, 3.0, 24.0),
    (0.5, 1.5, 10.5),
    (2.5, 2.0, 18.5),
];

const EPOCHS: usize = 150;
const LEARNING_RATE: f64 = 0.01;

fn main() -> Result<(), ScalarGradError> {
    let mut w0 = 50.0;
    let mut w1 = 50.0;
    let mut bias = 0.0;

    for epoch in 0..EPOCHS {
        let w0_node = Value::new_with_grad(w0);
        let w1_node = Value::new_with_grad(w1);
        let bias_node = Value::new_with_grad(bias);

        let mut loss = Value::new_with_grad(0.0);
        for (x0, x1, y) in DATASET {
            let y_hat = &(&(&w0_node * x0) + &(&w1_node * x1)) + &bias_node;
            let residual = &Value::new(y) - &y_hat;
            loss = &loss + &(&residual.powf(2.0) / 2.0);
        }

        println!("Epoch: {} Loss: {}", epoch + 1, loss.data());
        loss.backward()?;

        w0 -= LEARNING_RATE * w0_node.grad().unwrap_or(0.0);
        w1 -= LEARNING_RATE * w1_node.grad().unwrap_or(0.0);
        bias -= LEARNING_RATE * bias_node.grad().unwrap_or(0.0);
    }

    println!("w0: {}", w0);
    println!("w1: {}", w1);
    println!("bias: {}", bias);
    Ok(())
}
