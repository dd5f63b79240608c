//! Scenario configuration
//!
//! A scenario bundles a model file path with one feature vector. The
//! defaults reproduce the shipped reference runs; a JSON file can override
//! any subset of fields.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use stability_classifier_core_rs::{
    ClassificationRequest, ThreePlusOneFeatures, TwoPlusTwoFeatures,
};

fn default_model_path_2p2() -> String {
    "./mlp_model_2p2_ghost_v1.2.2.pkl".to_string()
}

fn default_model_path_3p1() -> String {
    "./mlp_model_3p1_ghost_v1.2.2.pkl".to_string()
}

/// Scenario for the 2+2 hierarchy entry point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario2p2 {
    #[serde(default = "default_model_path_2p2")]
    pub model_path: String,
    #[serde(default)]
    pub features: TwoPlusTwoFeatures,
}

impl Default for Scenario2p2 {
    fn default() -> Self {
        Self {
            model_path: default_model_path_2p2(),
            features: TwoPlusTwoFeatures::default(),
        }
    }
}

impl Scenario2p2 {
    /// Load a scenario from a JSON file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid scenario file {}", path.display()))
    }

    /// The classification request this scenario describes
    pub fn request(&self) -> ClassificationRequest {
        ClassificationRequest::two_plus_two(&self.model_path, &self.features)
    }
}

/// Scenario for the 3+1 hierarchy entry point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario3p1 {
    #[serde(default = "default_model_path_3p1")]
    pub model_path: String,
    #[serde(default)]
    pub features: ThreePlusOneFeatures,
}

impl Default for Scenario3p1 {
    fn default() -> Self {
        Self {
            model_path: default_model_path_3p1(),
            features: ThreePlusOneFeatures::default(),
        }
    }
}

impl Scenario3p1 {
    /// Load a scenario from a JSON file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid scenario file {}", path.display()))
    }

    /// The classification request this scenario describes
    pub fn request(&self) -> ClassificationRequest {
        ClassificationRequest::three_plus_one(&self.model_path, &self.features)
    }
}
