//! "+1" counterfactual sensitivity analysis
//!
//! For each bumpable partner trait: clone the unmodified base vector, raise
//! that one column by a point (saturating at the top of the rating scale),
//! rescore, and record the new probability and its delta against the base.
//! Perturbations never compound; every trait is measured from the same base.

use crate::artifacts::Classifier;
use crate::error::{DatecastError, Result};
use crate::features::FeatureVector;
use crate::schema;
use serde::{Deserialize, Serialize};

/// Outcome of bumping one trait by +1
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterfactualEntry {
    /// Schema column identifier of the bumped trait
    pub column: String,
    /// Human-readable trait label for display
    pub label: String,
    /// Probability of "yes" with the trait bumped
    pub probability: f64,
    /// Difference against the base probability
    pub delta: f64,
}

/// Evaluate the "+1" counterfactual for each trait, in the given order.
///
/// Each entry is computed from a fresh clone of `base`; bumping trait A can
/// never affect the delta recorded for trait B. A trait already at 10 is
/// rescored at exactly 10.
pub fn sensitivity<C: Classifier>(
    model: &C,
    base: &FeatureVector,
    base_probability: f64,
    traits: &[&str],
) -> Result<Vec<CounterfactualEntry>> {
    let mut entries = Vec::with_capacity(traits.len());

    for &column in traits {
        let current = base
            .get(column)
            .ok_or_else(|| DatecastError::FeatureNotFound(column.to_string()))?;

        let mut bumped = base.clone();
        bumped.set(column, (current + 1.0).min(schema::RATING_MAX))?;

        let probability = super::score(model, &bumped)?;
        entries.push(CounterfactualEntry {
            column: column.to_string(),
            label: schema::display_label(column).to_string(),
            probability,
            delta: probability - base_probability,
        });
    }

    Ok(entries)
}

/// Sort entries by bumped probability, highest first.
///
/// Display policy only; the raw deltas and their trait order are unchanged
/// in meaning.
pub fn rank_descending(entries: &mut [CounterfactualEntry]) {
    entries.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::{BaselineRow, ForestClassifier, TreeNode};
    use crate::features::{build_feature_vector, FormConfig, UserInputs};
    use approx::assert_relative_eq;

    fn stump(feature_idx: usize, threshold: f64) -> TreeNode {
        TreeNode::Split {
            feature_idx,
            threshold,
            left: Box::new(TreeNode::Leaf { value: 0.0 }),
            right: Box::new(TreeNode::Leaf { value: 1.0 }),
        }
    }

    /// Baseline over the thirteen form columns, in schema order
    fn baseline() -> BaselineRow {
        let mut pairs = Vec::new();
        for col in [
            schema::ATTRACTIVE_PARTNER,
            schema::SINCERE_PARTNER,
            schema::INTELLIGENCE_PARTNER,
            schema::FUNNY_PARTNER,
            schema::AMBITION_PARTNER,
            schema::SHARED_INTERESTS_PARTNER,
            schema::ATTRACTIVE_IMPORTANT,
            schema::SINCERE_IMPORTANT,
            schema::INTELLIGENCE_IMPORTANT,
            schema::FUNNY_IMPORTANT,
            schema::AMBITION_IMPORTANT,
            schema::SHARED_INTERESTS_IMPORTANT,
            schema::INTERESTS_CORRELATE,
        ] {
            pairs.push((col.to_string(), 5.0));
        }
        BaselineRow::from_columns(pairs).unwrap()
    }

    /// Forest where only `attractive_partner` (feature 0) matters:
    /// 4 stumps at threshold 8.5, 6 trees voting yes unconditionally
    fn attractive_forest() -> ForestClassifier {
        let mut trees = vec![
            stump(0, 8.5),
            stump(0, 8.5),
            stump(0, 8.5),
            stump(0, 8.5),
        ];
        for _ in 0..6 {
            trees.push(TreeNode::Leaf { value: 1.0 });
        }
        let names = baseline().columns().to_vec();
        ForestClassifier::new(trees, vec![0.0, 1.0], names).unwrap()
    }

    #[test]
    fn test_bump_moves_only_its_own_probability() {
        let baseline = baseline();
        let model = attractive_forest();
        let inputs = UserInputs {
            attractive: 8.0,
            ..UserInputs::default()
        };
        let base = build_feature_vector(&baseline, &inputs, &FormConfig::default()).unwrap();
        let base_p = super::super::score(&model, &base).unwrap();
        assert_relative_eq!(base_p, 0.6);

        let entries =
            sensitivity(&model, &base, base_p, &schema::BUMPABLE_TRAITS).unwrap();
        assert_eq!(entries.len(), 6);

        // attractive 8 -> 9 crosses the 8.5 split: all ten trees vote yes
        assert_relative_eq!(entries[0].probability, 1.0);
        assert_relative_eq!(entries[0].delta, 0.4);

        // Every other trait leaves the forest's vote unchanged
        for entry in &entries[1..] {
            assert_relative_eq!(entry.probability, 0.6);
            assert_relative_eq!(entry.delta, 0.0);
        }
    }

    #[test]
    fn test_perturbations_never_compound() {
        let baseline = baseline();
        let model = attractive_forest();
        let inputs = UserInputs {
            attractive: 8.0,
            ..UserInputs::default()
        };
        let base = build_feature_vector(&baseline, &inputs, &FormConfig::default()).unwrap();
        let base_p = super::super::score(&model, &base).unwrap();

        let entries =
            sensitivity(&model, &base, base_p, &schema::BUMPABLE_TRAITS).unwrap();

        // The base vector is untouched after the whole pass
        assert_eq!(base.get(schema::ATTRACTIVE_PARTNER), Some(8.0));

        // Reversing trait order yields identical per-trait numbers
        let reversed: Vec<&str> = schema::BUMPABLE_TRAITS.iter().rev().copied().collect();
        let mut reversed_entries = sensitivity(&model, &base, base_p, &reversed).unwrap();
        reversed_entries.reverse();
        for (a, b) in entries.iter().zip(reversed_entries.iter()) {
            assert_eq!(a.column, b.column);
            assert_relative_eq!(a.delta, b.delta);
        }
    }

    #[test]
    fn test_saturation_at_rating_max() {
        let baseline = baseline();
        let model = attractive_forest();
        let inputs = UserInputs {
            attractive: 10.0,
            ..UserInputs::default()
        };
        let base = build_feature_vector(&baseline, &inputs, &FormConfig::default()).unwrap();
        let base_p = super::super::score(&model, &base).unwrap();

        let entries = sensitivity(&model, &base, base_p, &[schema::ATTRACTIVE_PARTNER]).unwrap();
        // Already at the cap: the counterfactual vector holds exactly 10,
        // so the bumped probability equals the base probability
        assert_relative_eq!(entries[0].probability, base_p);
        assert_relative_eq!(entries[0].delta, 0.0);
    }

    #[test]
    fn test_unknown_trait_is_an_error() {
        let baseline = baseline();
        let model = attractive_forest();
        let base =
            build_feature_vector(&baseline, &UserInputs::default(), &FormConfig::default())
                .unwrap();
        let err = sensitivity(&model, &base, 0.5, &["charisma_partner"]);
        assert!(matches!(err, Err(DatecastError::FeatureNotFound(_))));
    }

    #[test]
    fn test_rank_descending_sorts_by_probability() {
        let mut entries = vec![
            CounterfactualEntry {
                column: "a".to_string(),
                label: "a".to_string(),
                probability: 0.4,
                delta: -0.1,
            },
            CounterfactualEntry {
                column: "b".to_string(),
                label: "b".to_string(),
                probability: 0.9,
                delta: 0.4,
            },
            CounterfactualEntry {
                column: "c".to_string(),
                label: "c".to_string(),
                probability: 0.6,
                delta: 0.1,
            },
        ];
        rank_descending(&mut entries);
        let order: Vec<&str> = entries.iter().map(|e| e.column.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }
}
