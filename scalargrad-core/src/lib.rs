//! Reverse-mode automatic differentiation over scalar computation graphs.
//!
//! Arithmetic on [`Value`] handles records a directed acyclic graph of scalar
//! operations; [`Value::backward`] then accumulates the gradient of one output
//! with respect to every gradient-requiring ancestor.

pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

pub mod error;

// Re-export the handle type so callers can use `scalargrad_core::Value`.
pub use value::Value;
pub use error::ScalarGradError;
