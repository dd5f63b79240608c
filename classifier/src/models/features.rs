//! Feature vectors for the two quadruple-system hierarchies
//!
//! A quadruple can be arranged as two binaries orbiting each other (2+2) or
//! as a triple with a distant fourth companion (3+1). Each arrangement is
//! described by exactly 11 dimensionless parameters: three mass ratios, two
//! semi-major-axis ratios, three eccentricities, and three mutual
//! inclinations.
//!
//! CRITICAL: the order produced by `as_ordered` is the positional order the
//! Python classifier expects. It must match the field order below exactly.

use serde::{Deserialize, Serialize};

/// Number of parameters in every feature vector
pub const FEATURE_COUNT: usize = 11;

/// Feature vector for a 2+2 hierarchy (two inner binaries + outer orbit)
///
/// `Default` reproduces the shipped reference scenario: two equal-mass inner
/// binaries on circular, coplanar orbits at one fifth of the outer
/// separation.
///
/// # Example
/// ```
/// use stability_classifier_core_rs::TwoPlusTwoFeatures;
///
/// let features = TwoPlusTwoFeatures::default();
/// assert_eq!(features.as_ordered()[0], 1.0); // mratio_inner1
/// assert_eq!(features.as_ordered()[2], 0.5); // mratio_outer
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoPlusTwoFeatures {
    /// Mass ratio of the first inner binary
    pub mratio_inner1: f64,
    /// Mass ratio of the second inner binary
    pub mratio_inner2: f64,
    /// Mass ratio of the outer orbit
    pub mratio_outer: f64,
    /// Semi-major-axis ratio, first inner binary to outer orbit
    pub aratio_inner1_outer: f64,
    /// Semi-major-axis ratio, second inner binary to outer orbit
    pub aratio_inner2_outer: f64,
    /// Eccentricity of the first inner binary
    pub ecc_inner1: f64,
    /// Eccentricity of the second inner binary
    pub ecc_inner2: f64,
    /// Eccentricity of the outer orbit
    pub ecc_outer: f64,
    /// Mutual inclination between the two inner binaries (degrees)
    pub inc_inner1_inner2: f64,
    /// Mutual inclination between the first inner binary and the outer orbit
    pub inc_inner1_outer: f64,
    /// Mutual inclination between the second inner binary and the outer orbit
    pub inc_inner2_outer: f64,
}

impl TwoPlusTwoFeatures {
    /// The positional order the classifier expects, after the model path
    pub fn as_ordered(&self) -> [f64; FEATURE_COUNT] {
        [
            self.mratio_inner1,
            self.mratio_inner2,
            self.mratio_outer,
            self.aratio_inner1_outer,
            self.aratio_inner2_outer,
            self.ecc_inner1,
            self.ecc_inner2,
            self.ecc_outer,
            self.inc_inner1_inner2,
            self.inc_inner1_outer,
            self.inc_inner2_outer,
        ]
    }
}

impl Default for TwoPlusTwoFeatures {
    fn default() -> Self {
        Self {
            mratio_inner1: 1.0,
            mratio_inner2: 1.0,
            mratio_outer: 0.5,
            aratio_inner1_outer: 0.2,
            aratio_inner2_outer: 0.2,
            ecc_inner1: 0.0,
            ecc_inner2: 0.0,
            ecc_outer: 0.0,
            inc_inner1_inner2: 0.0,
            inc_inner1_outer: 0.0,
            inc_inner2_outer: 0.0,
        }
    }
}

/// Feature vector for a 3+1 hierarchy (inner binary + intermediate + outer)
///
/// `Default` reproduces the shipped reference scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreePlusOneFeatures {
    /// Mass ratio of the inner binary
    pub mratio_inner: f64,
    /// Mass ratio of the intermediate orbit
    pub mratio_intermediate: f64,
    /// Mass ratio of the outer orbit
    pub mratio_outer: f64,
    /// Semi-major-axis ratio, inner binary to intermediate orbit
    pub aratio_inner_intermediate: f64,
    /// Semi-major-axis ratio, intermediate orbit to outer orbit
    pub aratio_intermediate_outer: f64,
    /// Eccentricity of the inner binary
    pub ecc_inner: f64,
    /// Eccentricity of the intermediate orbit
    pub ecc_intermediate: f64,
    /// Eccentricity of the outer orbit
    pub ecc_outer: f64,
    /// Mutual inclination between inner binary and intermediate orbit
    pub inc_inner_intermediate: f64,
    /// Mutual inclination between inner binary and outer orbit
    pub inc_inner_outer: f64,
    /// Mutual inclination between intermediate and outer orbits
    pub inc_intermediate_outer: f64,
}

impl ThreePlusOneFeatures {
    /// The positional order the classifier expects, after the model path
    pub fn as_ordered(&self) -> [f64; FEATURE_COUNT] {
        [
            self.mratio_inner,
            self.mratio_intermediate,
            self.mratio_outer,
            self.aratio_inner_intermediate,
            self.aratio_intermediate_outer,
            self.ecc_inner,
            self.ecc_intermediate,
            self.ecc_outer,
            self.inc_inner_intermediate,
            self.inc_inner_outer,
            self.inc_intermediate_outer,
        ]
    }
}

impl Default for ThreePlusOneFeatures {
    fn default() -> Self {
        Self {
            mratio_inner: 1.0,
            mratio_intermediate: 0.5,
            mratio_outer: 0.33,
            aratio_inner_intermediate: 0.2,
            aratio_intermediate_outer: 0.2,
            ecc_inner: 0.0,
            ecc_intermediate: 0.0,
            ecc_outer: 0.0,
            inc_inner_intermediate: 0.0,
            inc_inner_outer: 0.0,
            inc_intermediate_outer: 0.0,
        }
    }
}
