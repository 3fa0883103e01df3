//! Feature row construction
//!
//! Defaults-then-overrides: every vector starts as a copy of the baseline
//! row, then the form's inputs overwrite their named columns. The result is
//! always fully populated and in the classifier's training-time column
//! order.

mod builder;
mod vector;

pub use builder::{build_feature_vector, FormConfig, UserInputs};
pub use vector::FeatureVector;
