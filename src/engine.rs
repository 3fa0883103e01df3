//! Decision engine: load-once artifacts, one full recompute per interaction

use crate::artifacts::{BaselineRow, Classifier, ForestClassifier};
use crate::error::{DatecastError, Result};
use crate::features::{build_feature_vector, FormConfig, UserInputs};
use crate::schema;
use crate::scoring::{self, CounterfactualEntry, Verdict};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Everything one interaction produces: base probability, verdict label,
/// and the per-trait counterfactuals in schema trait order
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub probability: f64,
    pub verdict: Verdict,
    pub counterfactuals: Vec<CounterfactualEntry>,
}

impl Evaluation {
    /// Counterfactuals sorted for display, highest bumped probability first
    pub fn ranked_counterfactuals(&self) -> Vec<CounterfactualEntry> {
        let mut ranked = self.counterfactuals.clone();
        scoring::rank_descending(&mut ranked);
        ranked
    }
}

/// Holds the trained classifier and baseline row behind `Arc`, read-only
/// for the life of the process. Each `evaluate` call is a synchronous,
/// self-contained recompute; nothing is cached between interactions.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    model: Arc<ForestClassifier>,
    baseline: Arc<BaselineRow>,
    config: FormConfig,
}

impl DecisionEngine {
    /// Load both artifacts from disk. Absence or malformation of either is
    /// fatal; there is no degraded mode.
    pub fn load(model_path: &Path, baseline_path: &Path, config: FormConfig) -> Result<Self> {
        let model = ForestClassifier::load(model_path)?;
        let baseline = BaselineRow::load(baseline_path)?;
        info!(
            trees = model.n_trees(),
            columns = baseline.len(),
            "artifacts loaded"
        );
        Self::from_parts(model, baseline, config)
    }

    /// Assemble an engine from already-loaded artifacts, checking that the
    /// baseline's columns match the model's training-time schema in order
    pub fn from_parts(
        model: ForestClassifier,
        baseline: BaselineRow,
        config: FormConfig,
    ) -> Result<Self> {
        if model.feature_names() != baseline.columns() {
            return Err(DatecastError::SchemaMismatch {
                expected: model.feature_names().join(","),
                actual: baseline.columns().join(","),
            });
        }
        Ok(Self {
            model: Arc::new(model),
            baseline: Arc::new(baseline),
            config,
        })
    }

    /// One full recompute: build the vector, score it, and evaluate every
    /// bumpable trait's "+1" counterfactual from the unperturbed base
    pub fn evaluate(&self, inputs: &UserInputs) -> Result<Evaluation> {
        let vector = build_feature_vector(&self.baseline, inputs, &self.config)?;
        let probability = scoring::score(self.model.as_ref(), &vector)?;
        let counterfactuals = scoring::sensitivity(
            self.model.as_ref(),
            &vector,
            probability,
            &schema::BUMPABLE_TRAITS,
        )?;

        Ok(Evaluation {
            probability,
            verdict: Verdict::from_probability(probability),
            counterfactuals,
        })
    }

    pub fn baseline(&self) -> &BaselineRow {
        &self.baseline
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }
}
