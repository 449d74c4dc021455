use super::*;
use crate::autograd::check_grad;
use approx::assert_relative_eq;
use rand::Rng;

#[test]
fn test_div_forward() {
    let a = Value::new(7.0);
    let b = Value::new(2.0);
    let result = div_op(&a, &b);
    assert_eq!(result.data(), 3.5);
    assert_eq!(result.op(), Some(OpKind::Div));
}

#[test]
fn test_div_operator_overloads() {
    let a = Value::new_with_grad(6.0);

    assert_eq!((&a / &Value::new(3.0)).data(), 2.0);
    assert_eq!((&a / 2.0).data(), 3.0);
    assert_eq!((12.0 / &a).data(), 2.0);
}

#[test]
fn test_div_backward() {
    let a = Value::new_with_grad(6.0);
    let b = Value::new_with_grad(2.0);
    let result = div_op(&a, &b);

    result.backward().unwrap();

    // d(a/b)/da = 1/b = 0.5, d(a/b)/db = -a/b^2 = -1.5
    assert_relative_eq!(a.grad().unwrap(), 0.5);
    assert_relative_eq!(b.grad().unwrap(), -1.5);
}

#[test]
fn test_div_by_zero_follows_ieee() {
    // No error is raised; the quotient and the gradients are non-finite.
    let a = Value::new_with_grad(1.0);
    let b = Value::new_with_grad(0.0);
    let result = div_op(&a, &b);

    assert!(result.data().is_infinite());

    result.backward().unwrap();
    assert!(a.grad().unwrap().is_infinite());
    assert!(b.grad().unwrap().is_infinite());
}

#[test]
fn test_div_grad_check() {
    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let a = rng.gen_range(-10.0..10.0);
        // Keep the denominator away from zero, where the derivative blows up.
        let b = rng.gen_range(0.5..10.0) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        check_grad(|leaves| div_op(&leaves[0], &leaves[1]), &[a, b], 1e-6, 1e-4)
            .expect("div gradient mismatch");
    }
}
