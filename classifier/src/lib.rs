//! Stability Classifier Core - Rust Adapter
//!
//! Embeds a Python interpreter to invoke a pre-trained MLP stability
//! classifier for hierarchical quadruple star systems. The classifier
//! itself (a pickled scikit-learn model) is an opaque external resource;
//! this crate only marshals a fixed feature vector across the language
//! boundary and coerces the answer into a stability verdict.
//!
//! # Architecture
//!
//! - **models**: Domain types (feature vectors, requests, verdicts)
//! - **adapter**: The embedded-interpreter call boundary
//! - **error**: Failure taxonomy for the call boundary
//!
//! # Critical Invariants
//!
//! 1. The positional argument order `(model_path, p1..p11)` is part of the
//!    contract with the Python classifier and must never change
//! 2. The interpreter is initialized at most once per process; calls are
//!    serialized by the GIL
//! 3. Every Python reference acquired during a call is released on every
//!    exit path (RAII via `Bound` handles - no manual refcounting)

// Module declarations
pub mod adapter;
pub mod error;
pub mod models;

// Re-exports for convenience
pub use adapter::classify;
pub use error::ClassifierError;
pub use models::{
    features::{ThreePlusOneFeatures, TwoPlusTwoFeatures},
    request::{ClassificationRequest, PythonBinding},
    verdict::{Stability, Verdict},
};
