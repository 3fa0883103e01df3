//! Scoring and counterfactual analysis
//!
//! `score` asks the classifier for the "yes" probability of one vector;
//! `sensitivity` measures each trait's marginal effect by rescoring
//! single-trait "+1" perturbations of the same base vector.

mod counterfactual;
mod scorer;

pub use counterfactual::{rank_descending, sensitivity, CounterfactualEntry};
pub use scorer::{score, Verdict};
