//! Startup artifacts: the trained classifier and the baseline averages
//!
//! Both are loaded once from local files and shared read-only for the
//! lifetime of the process. Absence of either is a fatal startup condition.

mod baseline;
mod forest;

pub use baseline::BaselineRow;
pub use forest::{Classifier, ForestClassifier, TreeNode};
