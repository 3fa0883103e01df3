//! datecast - Date decision simulator
//!
//! Predicts how likely you are to say "yes" to seeing a prospective partner
//! again, given your ratings of them and your own stated preferences, and
//! shows how each rating moves the odds.
//!
//! # Modules
//!
//! - [`artifacts`] - Trained classifier and baseline-averages loading
//! - [`features`] - Feature row construction (baseline fill-in + overrides)
//! - [`scoring`] - Probability scoring, verdict threshold, counterfactuals
//! - [`engine`] - Load-once decision engine, one recompute per interaction
//! - [`cli`] - Terminal form and chart rendering
//!
//! The classifier is an opaque, load-once artifact; this crate never trains
//! it, it only invokes its probability interface.

// Core error handling
pub mod error;

// Artifacts and feature construction
pub mod artifacts;
pub mod features;
pub mod schema;

// Scoring
pub mod scoring;

// Orchestration
pub mod engine;

// Terminal surface
pub mod cli;

pub use error::{DatecastError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::artifacts::{BaselineRow, Classifier, ForestClassifier};
    pub use crate::engine::{DecisionEngine, Evaluation};
    pub use crate::error::{DatecastError, Result};
    pub use crate::features::{build_feature_vector, FeatureVector, FormConfig, UserInputs};
    pub use crate::scoring::{rank_descending, score, sensitivity, CounterfactualEntry, Verdict};
}
