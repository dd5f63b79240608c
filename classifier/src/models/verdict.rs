//! Stability verdicts
//!
//! The model answers a two-state question (stable / unstable). The caller
//! observes a tri-state outcome, because the call across the interpreter
//! boundary can fail. `Stability` is the former, `Verdict` the latter.

use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// The classifier's answer for one feature vector
///
/// # Example
/// ```
/// use stability_classifier_core_rs::Stability;
///
/// assert_eq!(Stability::from(true), Stability::Stable);
/// assert_eq!(Stability::from(false), Stability::Unstable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stability {
    /// The model predicts the system survives
    Stable,
    /// The model predicts the system disrupts
    Unstable,
}

impl From<bool> for Stability {
    fn from(stable: bool) -> Self {
        if stable {
            Stability::Stable
        } else {
            Stability::Unstable
        }
    }
}

impl Stability {
    pub fn is_stable(&self) -> bool {
        matches!(self, Stability::Stable)
    }
}

/// Observable outcome of one classification call
///
/// All failure causes (missing module, missing callable, bad arguments,
/// raised exception, contract-violating return value) collapse to
/// `Verdict::Error`; diagnostic detail travels on the side channel only.
///
/// # Example
/// ```
/// use stability_classifier_core_rs::{Stability, Verdict};
///
/// let verdict = Verdict::from(Ok::<_, stability_classifier_core_rs::ClassifierError>(
///     Stability::Stable,
/// ));
/// assert_eq!(verdict.label(), "ML stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Stable,
    Unstable,
    Error,
}

impl Verdict {
    /// The literal line each CLI entry point prints
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Stable => "ML stable",
            Verdict::Unstable => "ML unstable",
            Verdict::Error => "ERROR",
        }
    }
}

impl From<Result<Stability, ClassifierError>> for Verdict {
    fn from(result: Result<Stability, ClassifierError>) -> Self {
        match result {
            Ok(Stability::Stable) => Verdict::Stable,
            Ok(Stability::Unstable) => Verdict::Unstable,
            Err(_) => Verdict::Error,
        }
    }
}

impl From<Stability> for Verdict {
    fn from(stability: Stability) -> Self {
        match stability {
            Stability::Stable => Verdict::Stable,
            Stability::Unstable => Verdict::Unstable,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
