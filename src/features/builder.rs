//! Feature row builder: baseline fill-in plus user overrides

use crate::artifacts::BaselineRow;
use crate::error::Result;
use crate::features::FeatureVector;
use crate::schema;
use serde::{Deserialize, Serialize};

/// The form's thirteen scalar inputs.
///
/// Ratings are 1-10, the correlation is -1.0 to 1.0; the form enforces the
/// ranges, the builder writes them through as given. Defaults are the form's
/// slider starting positions and carry no semantic meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInputs {
    pub attractive: f64,
    pub sincere: f64,
    pub intelligent: f64,
    pub funny: f64,
    pub ambitious: f64,
    pub shared_interests: f64,

    pub attractive_importance: f64,
    pub sincere_importance: f64,
    pub intelligence_importance: f64,
    pub funny_importance: f64,
    pub ambition_importance: f64,
    pub shared_interests_importance: f64,

    pub interest_correlation: f64,
}

impl Default for UserInputs {
    fn default() -> Self {
        Self {
            attractive: 6.0,
            sincere: 7.0,
            intelligent: 7.0,
            funny: 7.0,
            ambitious: 6.0,
            shared_interests: 5.0,
            attractive_importance: 6.0,
            sincere_importance: 7.0,
            intelligence_importance: 7.0,
            funny_importance: 7.0,
            ambition_importance: 6.0,
            shared_interests_importance: 6.0,
            interest_correlation: 0.5,
        }
    }
}

/// Form-variant configuration.
///
/// The two historical variants of the form differ only in whether the
/// shared-interests partner rating is user-editable or held at its baseline
/// average; that difference is a toggle here, not a second code path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// When false, `shared_interests_partner` stays at baseline
    pub shared_interests_editable: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            shared_interests_editable: true,
        }
    }
}

impl FormConfig {
    pub fn with_shared_interests_editable(mut self, editable: bool) -> Self {
        self.shared_interests_editable = editable;
        self
    }
}

/// Merge user inputs onto the baseline row.
///
/// Copies the baseline, then unconditionally overwrites the named input
/// columns. No clamping happens here; values land exactly as given.
pub fn build_feature_vector(
    baseline: &BaselineRow,
    inputs: &UserInputs,
    config: &FormConfig,
) -> Result<FeatureVector> {
    let mut vector = FeatureVector::from_baseline(baseline);

    vector.set(schema::ATTRACTIVE_PARTNER, inputs.attractive)?;
    vector.set(schema::SINCERE_PARTNER, inputs.sincere)?;
    vector.set(schema::INTELLIGENCE_PARTNER, inputs.intelligent)?;
    vector.set(schema::FUNNY_PARTNER, inputs.funny)?;
    vector.set(schema::AMBITION_PARTNER, inputs.ambitious)?;
    if config.shared_interests_editable {
        vector.set(schema::SHARED_INTERESTS_PARTNER, inputs.shared_interests)?;
    }

    vector.set(schema::ATTRACTIVE_IMPORTANT, inputs.attractive_importance)?;
    vector.set(schema::SINCERE_IMPORTANT, inputs.sincere_importance)?;
    vector.set(schema::INTELLIGENCE_IMPORTANT, inputs.intelligence_importance)?;
    vector.set(schema::FUNNY_IMPORTANT, inputs.funny_importance)?;
    vector.set(schema::AMBITION_IMPORTANT, inputs.ambition_importance)?;
    vector.set(
        schema::SHARED_INTERESTS_IMPORTANT,
        inputs.shared_interests_importance,
    )?;

    vector.set(schema::INTERESTS_CORRELATE, inputs.interest_correlation)?;

    Ok(vector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DatecastError;

    /// Baseline with the thirteen form columns plus a few hidden ones,
    /// every value distinct from any plausible user input
    fn baseline() -> BaselineRow {
        let mut pairs: Vec<(String, f64)> = vec![
            (schema::ATTRACTIVE_PARTNER.to_string(), 6.19),
            (schema::SINCERE_PARTNER.to_string(), 7.18),
            (schema::INTELLIGENCE_PARTNER.to_string(), 7.37),
            (schema::FUNNY_PARTNER.to_string(), 6.4),
            (schema::AMBITION_PARTNER.to_string(), 6.78),
            (schema::SHARED_INTERESTS_PARTNER.to_string(), 5.47),
            (schema::ATTRACTIVE_IMPORTANT.to_string(), 22.51),
            (schema::SINCERE_IMPORTANT.to_string(), 17.4),
            (schema::INTELLIGENCE_IMPORTANT.to_string(), 20.27),
            (schema::FUNNY_IMPORTANT.to_string(), 17.46),
            (schema::AMBITION_IMPORTANT.to_string(), 10.69),
            (schema::SHARED_INTERESTS_IMPORTANT.to_string(), 11.85),
            (schema::INTERESTS_CORRELATE.to_string(), 0.196),
        ];
        for hidden in ["d_age", "samerace", "met", "like", "guess_prob_liked"] {
            pairs.push((hidden.to_string(), 0.42));
        }
        BaselineRow::from_columns(pairs).unwrap()
    }

    #[test]
    fn test_every_baseline_column_is_present() {
        let baseline = baseline();
        let vector =
            build_feature_vector(&baseline, &UserInputs::default(), &FormConfig::default())
                .unwrap();
        assert_eq!(vector.columns(), baseline.columns());
        assert_eq!(vector.len(), baseline.len());
    }

    #[test]
    fn test_exactly_the_overwritten_columns_differ() {
        let baseline = baseline();
        let inputs = UserInputs {
            attractive: 8.0,
            sincere: 7.0,
            intelligent: 7.0,
            funny: 8.0,
            ambitious: 6.0,
            shared_interests: 5.0,
            attractive_importance: 7.0,
            sincere_importance: 7.0,
            intelligence_importance: 7.0,
            funny_importance: 7.0,
            ambition_importance: 7.0,
            shared_interests_importance: 7.0,
            interest_correlation: 0.5,
        };
        let vector = build_feature_vector(&baseline, &inputs, &FormConfig::default()).unwrap();

        let overwritten = [
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
        ];
        for col in baseline.columns() {
            if overwritten.contains(&col.as_str()) {
                continue;
            }
            assert_eq!(
                vector.get(col),
                baseline.get(col),
                "hidden column '{}' drifted from baseline",
                col
            );
        }
        assert_eq!(vector.get(schema::ATTRACTIVE_PARTNER), Some(8.0));
        assert_eq!(vector.get(schema::INTELLIGENCE_IMPORTANT), Some(7.0));
        assert_eq!(vector.get(schema::INTERESTS_CORRELATE), Some(0.5));
    }

    #[test]
    fn test_values_are_written_unclamped() {
        // Range enforcement belongs to the form, not the builder
        let baseline = baseline();
        let inputs = UserInputs {
            attractive: 12.0,
            ..UserInputs::default()
        };
        let vector = build_feature_vector(&baseline, &inputs, &FormConfig::default()).unwrap();
        assert_eq!(vector.get(schema::ATTRACTIVE_PARTNER), Some(12.0));
    }

    #[test]
    fn test_frozen_shared_interests_stays_at_baseline() {
        let baseline = baseline();
        let inputs = UserInputs {
            shared_interests: 9.0,
            ..UserInputs::default()
        };
        let config = FormConfig::default().with_shared_interests_editable(false);
        let vector = build_feature_vector(&baseline, &inputs, &config).unwrap();
        assert_eq!(
            vector.get(schema::SHARED_INTERESTS_PARTNER),
            baseline.get(schema::SHARED_INTERESTS_PARTNER)
        );
        // The matching importance column is still user-controlled
        assert_eq!(vector.get(schema::SHARED_INTERESTS_IMPORTANT), Some(6.0));
    }

    #[test]
    fn test_baseline_missing_a_schema_column_is_an_error() {
        let truncated = BaselineRow::from_columns(vec![
            (schema::ATTRACTIVE_PARTNER.to_string(), 6.0),
            ("d_age".to_string(), 4.0),
        ])
        .unwrap();
        let err =
            build_feature_vector(&truncated, &UserInputs::default(), &FormConfig::default());
        assert!(matches!(err, Err(DatecastError::FeatureNotFound(_))));
    }

    #[test]
    fn test_default_inputs_match_form_slider_positions() {
        let inputs = UserInputs::default();
        assert_eq!(inputs.attractive, 6.0);
        assert_eq!(inputs.shared_interests, 5.0);
        assert_eq!(inputs.interest_correlation, 0.5);
    }
}
