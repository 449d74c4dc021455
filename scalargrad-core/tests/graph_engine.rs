// Whole-graph scenarios exercised through the public API only.

use approx::assert_relative_eq;
use scalargrad_core::{ScalarGradError, Value};

mod common;
use common::{quadratic_loss, Params};

#[test]
fn test_composite_expression_uses_every_operator() {
    // f(x) = (-x + sqrt(x) * 3.0) - x^2 / 2.0, at x = 4:
    //   f  = (-4 + 2*3) - 16/2 = -6
    //   f' = -1 + 3/(2*sqrt(x)) - x = -1 + 0.75 - 4 = -4.25
    let x = Value::new_with_grad(4.0);
    let f = &(&(-&x) + &(&x.sqrt() * 3.0)) - &(&x.powf(2.0) / 2.0);

    assert_relative_eq!(f.data(), -6.0);

    f.backward().unwrap();
    assert_relative_eq!(x.grad().unwrap(), -4.25);
}

#[test]
fn test_leaf_shared_across_independent_graphs() {
    // The same parameter leaf feeds two separately-built graphs. Gradients
    // accumulate across passes until the caller resets them.
    let x = Value::new_with_grad(3.0);

    let double = &x * 2.0;
    double.backward().unwrap();
    assert_eq!(x.grad(), Some(2.0));

    let square = &x * &x;
    square.backward().unwrap();
    // 2.0 from the first graph + 6.0 from the second.
    assert_eq!(x.grad(), Some(8.0));

    square.zero_grad();
    assert_eq!(x.grad(), None);
}

#[test]
fn test_backward_error_leaves_graph_reusable_after_reset() {
    let (loss, w0, _, _) = quadratic_loss(&Params {
        w0: 1.0,
        w1: 1.0,
        bias: 0.0,
    });

    loss.backward().unwrap();
    assert_eq!(loss.backward(), Err(ScalarGradError::AlreadyDifferentiated));

    // A reset clears the guard as well as the gradients.
    loss.zero_grad();
    loss.backward().unwrap();
    assert!(w0.grad().is_some());
}

#[test]
fn test_graph_summary_reports_reachable_nodes() {
    let a = Value::new_with_grad(2.0);
    let b = Value::new(3.0);
    let product = &a * &b;

    let before = product.graph_summary();
    // Three nodes, one line each; no gradient has been touched yet.
    assert_eq!(before.lines().count(), 3);
    assert_eq!(before.matches("grad=unset").count(), 3);
    assert!(before.contains("op=Mul"));

    product.backward().unwrap();
    let after = product.graph_summary();
    assert!(after.contains("grad=1"));
    // The constant operand still never received a slot.
    assert_eq!(after.matches("grad=unset").count(), 1);
}

#[test]
fn test_debug_format_is_single_line() {
    let a = Value::new_with_grad(1.5);
    let rendered = format!("{:?}", &(&a + 1.0));
    assert!(rendered.starts_with("Value(data=2.5"));
    assert!(rendered.contains("op=Add"));
    assert!(rendered.contains("operands=2"));
    assert!(!rendered.contains('\n'));
}
