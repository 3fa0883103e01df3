//! Base scoring and the verdict threshold

use crate::artifacts::Classifier;
use crate::error::Result;
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};

/// Probability that the decision is "yes" for one feature vector.
///
/// Deterministic for a fixed artifact: the same vector always yields the
/// same probability.
pub fn score<C: Classifier>(model: &C, vector: &FeatureVector) -> Result<f64> {
    let proba = model.predict_proba(vector.values())?;
    Ok(proba[1])
}

/// Binarized decision, thresholded at 0.5 (exactly 0.5 is No)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Yes,
    No,
}

impl Verdict {
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.5 {
            Verdict::Yes
        } else {
            Verdict::No
        }
    }

    pub fn is_yes(self) -> bool {
        self == Verdict::Yes
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Yes => write!(f, "YES"),
            Verdict::No => write!(f, "NO"),
        }
    }
}
