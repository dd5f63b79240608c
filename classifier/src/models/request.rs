//! Classification requests
//!
//! A request pins down everything one adapter call needs: which Python
//! module and function to bind, which pickled model file the function should
//! load, and the 11 ordered parameters to pass.

use serde::{Deserialize, Serialize};

use super::features::{ThreePlusOneFeatures, TwoPlusTwoFeatures, FEATURE_COUNT};

/// Names the Python callable the adapter binds to
///
/// The module is resolved on `sys.path` (which includes the current working
/// directory), the function as an attribute of that module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PythonBinding {
    module: String,
    function: String,
}

impl PythonBinding {
    pub fn new(module: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            function: function.into(),
        }
    }

    /// Shipped binding for the 2+2 hierarchy classifier
    pub fn two_plus_two() -> Self {
        Self::new("classify_quad_2p2", "mlp_classifier_2p2")
    }

    /// Shipped binding for the 3+1 hierarchy classifier
    pub fn three_plus_one() -> Self {
        Self::new("classify_quad_3p1", "mlp_classifier_3p1")
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn function(&self) -> &str {
        &self.function
    }
}

/// One complete adapter invocation
///
/// # Example
/// ```
/// use stability_classifier_core_rs::{ClassificationRequest, TwoPlusTwoFeatures};
///
/// let request = ClassificationRequest::two_plus_two(
///     "./mlp_model_2p2_ghost_v1.2.2.pkl",
///     &TwoPlusTwoFeatures::default(),
/// );
/// assert_eq!(request.binding().module(), "classify_quad_2p2");
/// assert_eq!(request.params().len(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    binding: PythonBinding,
    model_path: String,
    params: [f64; FEATURE_COUNT],
}

impl ClassificationRequest {
    /// Request against the shipped 2+2 classifier binding
    pub fn two_plus_two(model_path: impl Into<String>, features: &TwoPlusTwoFeatures) -> Self {
        Self::with_binding(PythonBinding::two_plus_two(), model_path, features.as_ordered())
    }

    /// Request against the shipped 3+1 classifier binding
    pub fn three_plus_one(model_path: impl Into<String>, features: &ThreePlusOneFeatures) -> Self {
        Self::with_binding(
            PythonBinding::three_plus_one(),
            model_path,
            features.as_ordered(),
        )
    }

    /// Request against an arbitrary binding (probe modules, test stubs)
    pub fn with_binding(
        binding: PythonBinding,
        model_path: impl Into<String>,
        params: [f64; FEATURE_COUNT],
    ) -> Self {
        Self {
            binding,
            model_path: model_path.into(),
            params,
        }
    }

    pub fn binding(&self) -> &PythonBinding {
        &self.binding
    }

    pub fn model_path(&self) -> &str {
        &self.model_path
    }

    /// The 11 parameters in classifier order
    pub fn params(&self) -> &[f64; FEATURE_COUNT] {
        &self.params
    }
}
