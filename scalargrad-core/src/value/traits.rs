// src/value/traits.rs

use crate::value::Value;
use std::rc::Rc;

impl Clone for Value {
    /// Shallow clone: bumps the reference count of the shared node storage.
    /// Both handles observe the same value and gradient.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl From<f64> for Value {
    /// Promotes a bare scalar to a non-gradient leaf node.
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}
