//! Marshaling across the interpreter boundary
//!
//! Converts between the Rust request and the Python call convention:
//! building the positional argument tuple on the way in, coercing the
//! model's scalar answer on the way out.

use pyo3::prelude::*;
use pyo3::types::{PyFloat, PyString, PyTuple};

use crate::error::ClassifierError;
use crate::models::features::FEATURE_COUNT;
use crate::models::request::ClassificationRequest;
use crate::models::verdict::Stability;

/// Build the positional argument tuple `(model_path, p1..p11)`
///
/// Order is the contract with the classifier module: the model path first,
/// then the 11 parameters exactly as `params()` yields them.
pub fn build_arguments<'py>(
    py: Python<'py>,
    request: &ClassificationRequest,
) -> PyResult<Bound<'py, PyTuple>> {
    let mut items: Vec<Py<PyAny>> = Vec::with_capacity(1 + FEATURE_COUNT);
    items.push(PyString::new(py, request.model_path()).into_any().unbind());
    for value in request.params() {
        items.push(PyFloat::new(py, *value).into_any().unbind());
    }
    PyTuple::new(py, items)
}

/// Coerce the classifier's return value to a stability answer
///
/// The classifier is documented to return a boolean-like scalar. Accepted
/// shapes are `bool` and integer scalars (truthy maps to Stable, falsy to
/// Unstable). Anything else is a contract violation surfaced as
/// `ReturnContract` rather than silently truth-tested.
pub fn coerce_return(value: &Bound<'_, PyAny>) -> Result<Stability, ClassifierError> {
    if let Ok(flag) = value.extract::<bool>() {
        return Ok(Stability::from(flag));
    }
    if let Ok(scalar) = value.extract::<i64>() {
        return Ok(Stability::from(scalar != 0));
    }
    let type_name = value
        .get_type()
        .name()
        .map(|name| name.to_string())
        .unwrap_or_else(|_| "<unknown>".to_string());
    Err(ClassifierError::ReturnContract { type_name })
}
