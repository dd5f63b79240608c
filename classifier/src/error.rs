//! Failure taxonomy for the embedded call boundary
//!
//! One variant per stage of the adapter's state machine. Every variant
//! carries the rendered Python diagnostic so callers can log it; none are
//! recoverable at this layer, and all of them collapse to `Verdict::Error`
//! at the CLI surface.

use thiserror::Error;

/// Errors that can occur while invoking the Python classifier
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to configure module search path: {message}")]
    PathConfiguration { message: String },

    #[error("failed to import classifier module '{module}': {message}")]
    ModuleImport { module: String, message: String },

    #[error("no callable '{function}' in module '{module}': {message}")]
    AttributeResolution {
        module: String,
        function: String,
        message: String,
    },

    #[error("failed to build argument tuple for '{module}.{function}': {message}")]
    ArgumentConstruction {
        module: String,
        function: String,
        message: String,
    },

    #[error("classifier '{module}.{function}' raised: {message}")]
    Invocation {
        module: String,
        function: String,
        message: String,
    },

    #[error("classifier returned a non-boolean value of type '{type_name}'")]
    ReturnContract { type_name: String },
}
