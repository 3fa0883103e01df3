//! Inference-only random-forest classifier artifact
//!
//! The simulator never trains; it deserializes a forest that was fitted and
//! exported elsewhere, then invokes its probability interface. Each tree is
//! a plain threshold-split structure and the forest's class distribution is
//! the normalized vote count across trees.

use crate::error::{DatecastError, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Probability-estimation capability of the trained artifact.
///
/// One row of features in schema order, one two-element distribution over
/// {no, yes} back. The rest of the system consumes only the "yes" element.
pub trait Classifier {
    /// Column names in the order the model was trained on
    fn feature_names(&self) -> &[String];

    /// Probability distribution `[p_no, p_yes]` for a single feature row
    fn predict_proba(&self, features: &Array1<f64>) -> Result<[f64; 2]>;
}

/// Serialized decision-tree node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeNode {
    /// Leaf holding the predicted class label
    Leaf { value: f64 },
    /// Internal threshold split
    Split {
        feature_idx: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    fn decide(&self, sample: &Array1<f64>) -> f64 {
        match self {
            TreeNode::Leaf { value } => *value,
            TreeNode::Split {
                feature_idx,
                threshold,
                left,
                right,
            } => {
                if sample[*feature_idx] <= *threshold {
                    left.decide(sample)
                } else {
                    right.decide(sample)
                }
            }
        }
    }

    fn max_feature_idx(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Split {
                feature_idx,
                left,
                right,
                ..
            } => (*feature_idx).max(left.max_feature_idx()).max(right.max_feature_idx()),
        }
    }
}

/// Trained binary classifier, loaded once at startup and read-only after
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestClassifier {
    trees: Vec<TreeNode>,
    /// Class labels in ascending order; index 1 is the positive ("yes") class
    classes: Vec<f64>,
    feature_names: Vec<String>,
}

impl ForestClassifier {
    /// Assemble a forest from parts, validating the artifact invariants
    pub fn new(trees: Vec<TreeNode>, classes: Vec<f64>, feature_names: Vec<String>) -> Result<Self> {
        if trees.is_empty() {
            return Err(DatecastError::InvalidArtifact {
                kind: "model",
                reason: "forest contains no trees".to_string(),
            });
        }
        if classes.len() != 2 {
            return Err(DatecastError::InvalidArtifact {
                kind: "model",
                reason: format!("expected a binary classifier, got {} classes", classes.len()),
            });
        }
        let max_idx = trees.iter().map(|t| t.max_feature_idx()).max().unwrap_or(0);
        if max_idx >= feature_names.len() {
            return Err(DatecastError::InvalidArtifact {
                kind: "model",
                reason: format!(
                    "tree references feature index {} but only {} columns are named",
                    max_idx,
                    feature_names.len()
                ),
            });
        }
        Ok(Self {
            trees,
            classes,
            feature_names,
        })
    }

    /// Load the artifact from a JSON file; a missing file is a fatal
    /// startup condition with a user-explanatory message
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DatecastError::ArtifactMissing {
                kind: "model",
                path: path.to_path_buf(),
            });
        }
        let json = std::fs::read_to_string(path)?;
        let raw: Self = serde_json::from_str(&json)?;
        // Re-run the invariant checks on whatever was deserialized
        Self::new(raw.trees, raw.classes, raw.feature_names)
    }

    /// Serialize the artifact to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Number of trees in the forest
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Class labels (ascending; index 1 is "yes")
    pub fn classes(&self) -> &[f64] {
        &self.classes
    }
}

impl Classifier for ForestClassifier {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict_proba(&self, features: &Array1<f64>) -> Result<[f64; 2]> {
        if features.len() != self.feature_names.len() {
            return Err(DatecastError::SchemaMismatch {
                expected: format!("{} features", self.feature_names.len()),
                actual: format!("{} features", features.len()),
            });
        }

        // Majority voting across trees, normalized to a distribution
        let mut votes = [0.0_f64; 2];
        for tree in &self.trees {
            let label = tree.decide(features).round() as i64;
            if let Some(class_idx) = self
                .classes
                .iter()
                .position(|&c| c.round() as i64 == label)
            {
                votes[class_idx] += 1.0;
            }
        }

        let total: f64 = votes[0] + votes[1];
        if total == 0.0 {
            return Err(DatecastError::InvalidArtifact {
                kind: "model",
                reason: "no tree produced a known class label".to_string(),
            });
        }
        Ok([votes[0] / total, votes[1] / total])
    }
}
