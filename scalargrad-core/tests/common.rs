use scalargrad_core::Value;

/// Fixed two-feature regression dataset: rows of (x0, x1, y), generated by
/// y = 3*x0 + 4*x1 + 3 with no noise.
pub const DATASET: [(f64, f64, f64); 5] = [
    (1.0, 2.0, 14.0),
    (2.0, 1.0, 13.0),
    (3.0, 3.0, 24.0),
    (0.5, 1.5, 10.5),
    (2.5, 2.0, 18.5),
];

/// Parameters of the linear model, kept as plain floats between iterations;
/// leaf nodes are rebuilt from them for every loss graph.
pub struct Params {
    pub w0: f64,
    pub w1: f64,
    pub bias: f64,
}

/// Builds the quadratic-loss graph `sum((y - (w0*x0 + w1*x1 + bias))^2 / 2)`
/// over [`DATASET`] and returns the loss root together with the three
/// parameter leaves whose gradients the caller reads back.
pub fn quadratic_loss(params: &Params) -> (Value, Value, Value, Value) {
    let w0 = Value::new_with_grad(params.w0);
    let w1 = Value::new_with_grad(params.w1);
    let bias = Value::new_with_grad(params.bias);

    let mut loss = Value::new_with_grad(0.0);
    for (x0, x1, y) in DATASET {
        let y_hat = &(&(&w0 * x0) + &(&w1 * x1)) + &bias;
        let residual = &Value::new(y) - &y_hat;
        loss = &loss + &(&residual.powf(2.0) / 2.0);
    }

    (loss, w0, w1, bias)
}
