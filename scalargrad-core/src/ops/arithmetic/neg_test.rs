use super::*;
use crate::autograd::check_grad;

#[test]
fn test_neg_forward() {
    let a = Value::new(2.5);
    let result = neg_op(&a);
    assert_eq!(result.data(), -2.5);
    assert_eq!(result.op(), Some(OpKind::Neg));
    assert_eq!(result.operand_count(), 1);
}

#[test]
fn test_neg_operator_overload() {
    let a = Value::new_with_grad(3.0);
    let result = -&a;
    assert_eq!(result.data(), -3.0);
    assert!(result.requires_grad());
}

#[test]
fn test_neg_propagate_requires_grad() {
    assert!((-&Value::new_with_grad(1.0)).requires_grad());
    assert!(!(-&Value::new(1.0)).requires_grad());
}

#[test]
fn test_neg_backward() {
    let a = Value::new_with_grad(2.0);
    let result = -&a;

    result.backward().unwrap();

    assert_eq!(a.grad(), Some(-1.0));
}

#[test]
fn test_neg_grad_check() {
    for input in [-4.0, -0.5, 0.0, 1.25, 9.0] {
        check_grad(|leaves| neg_op(&leaves[0]), &[input], 1e-6, 1e-4)
            .expect("neg gradient mismatch");
    }
}
