//! Domain types for stability classification
//!
//! - **features**: Named 11-parameter feature vectors for the 2+2 and 3+1
//!   hierarchies
//! - **request**: Binding + model path + ordered parameters for one call
//! - **verdict**: Two-state model answer and tri-state observable outcome

pub mod features;
pub mod request;
pub mod verdict;

pub use features::{ThreePlusOneFeatures, TwoPlusTwoFeatures};
pub use request::{ClassificationRequest, PythonBinding};
pub use verdict::{Stability, Verdict};
