//! Embedded-interpreter call adapter
//!
//! The single entry point `classify` walks one invocation through the
//! boundary: acquire the interpreter, put the working directory on the
//! module search path, resolve the named callable, marshal the argument
//! tuple, invoke, and coerce the answer. Each stage maps its failure to a
//! dedicated `ClassifierError` variant; the next stage is never entered
//! after a failure.
//!
//! Lifecycle: the interpreter is initialized once per process (pyo3
//! `auto-initialize`) and never finalized. Calls are serialized by the GIL,
//! so concurrent callers are safe but not parallel. Every Python reference
//! taken during a call is a `Bound` handle released when the GIL scope
//! unwinds - on success and on every error branch alike.

pub mod marshal;

use pyo3::prelude::*;
use pyo3::types::PyList;
use tracing::{debug, error};

use crate::error::ClassifierError;
use crate::models::request::ClassificationRequest;
use crate::models::verdict::Stability;

/// Entry appended to `sys.path` so co-located classifier modules resolve
const CWD_PATH_ENTRY: &str = ".";

/// Invoke the bound Python classifier for one request
///
/// Blocking and synchronous; returns once the model has answered or the
/// boundary has failed. The positional argument order is
/// `(model_path, p1..p11)` and is part of the contract with the classifier
/// module.
///
/// # Errors
///
/// One `ClassifierError` variant per failed stage: path configuration,
/// module import, attribute resolution, argument construction, invocation,
/// or return-value coercion. The Python diagnostic is captured in the error
/// and also logged at error level.
///
/// # Example
///
/// ```no_run
/// use stability_classifier_core_rs::{classify, ClassificationRequest, TwoPlusTwoFeatures};
///
/// let request = ClassificationRequest::two_plus_two(
///     "./mlp_model_2p2_ghost_v1.2.2.pkl",
///     &TwoPlusTwoFeatures::default(),
/// );
/// match classify(&request) {
///     Ok(stability) => println!("model says {:?}", stability),
///     Err(err) => eprintln!("classification failed: {}", err),
/// }
/// ```
pub fn classify(request: &ClassificationRequest) -> Result<Stability, ClassifierError> {
    Python::with_gil(|py| classify_with_gil(py, request)).inspect_err(|err| {
        error!(error = %err, "classification failed");
    })
}

fn classify_with_gil(
    py: Python<'_>,
    request: &ClassificationRequest,
) -> Result<Stability, ClassifierError> {
    ensure_cwd_on_path(py).map_err(|err| ClassifierError::PathConfiguration {
        message: err.to_string(),
    })?;

    let binding = request.binding();
    debug!(
        module = binding.module(),
        function = binding.function(),
        model_path = request.model_path(),
        "resolving classifier"
    );

    let module = PyModule::import(py, binding.module()).map_err(|err| {
        ClassifierError::ModuleImport {
            module: binding.module().to_string(),
            message: err.to_string(),
        }
    })?;

    let function = module.getattr(binding.function()).map_err(|err| {
        ClassifierError::AttributeResolution {
            module: binding.module().to_string(),
            function: binding.function().to_string(),
            message: err.to_string(),
        }
    })?;
    if !function.is_callable() {
        return Err(ClassifierError::AttributeResolution {
            module: binding.module().to_string(),
            function: binding.function().to_string(),
            message: "attribute is not callable".to_string(),
        });
    }

    let args = marshal::build_arguments(py, request).map_err(|err| {
        ClassifierError::ArgumentConstruction {
            module: binding.module().to_string(),
            function: binding.function().to_string(),
            message: err.to_string(),
        }
    })?;

    let value = function.call1(args).map_err(|err| ClassifierError::Invocation {
        module: binding.module().to_string(),
        function: binding.function().to_string(),
        message: err.to_string(),
    })?;

    let stability = marshal::coerce_return(&value)?;
    debug!(stability = ?stability, "classifier answered");
    Ok(stability)
}

/// Put the current working directory on `sys.path`, exactly once
///
/// The reference behavior appended unconditionally on every call; here the
/// append is conditional so repeated classifications leave `sys.path`
/// unchanged after the first.
fn ensure_cwd_on_path(py: Python<'_>) -> PyResult<()> {
    let sys_path = py.import("sys")?.getattr("path")?;
    let sys_path = sys_path.downcast::<PyList>().map_err(PyErr::from)?;
    if !sys_path.contains(CWD_PATH_ENTRY)? {
        sys_path.append(CWD_PATH_ENTRY)?;
    }
    Ok(())
}
