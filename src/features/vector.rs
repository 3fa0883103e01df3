//! Schema-matching feature vector

use crate::artifacts::BaselineRow;
use crate::error::{DatecastError, Result};
use ndarray::Array1;
use std::collections::HashMap;
use std::sync::Arc;

/// One complete row of named feature values in baseline column order.
///
/// Always fully populated by construction: it starts as a copy of the
/// baseline row and only existing columns can be overwritten, so it is
/// scorable at any point in its life.
#[derive(Debug, Clone)]
pub struct FeatureVector {
    columns: Arc<Vec<String>>,
    index: Arc<HashMap<String, usize>>,
    values: Array1<f64>,
}

impl FeatureVector {
    /// Seed a vector with the baseline's columns and default values
    pub fn from_baseline(baseline: &BaselineRow) -> Self {
        Self {
            columns: baseline.columns_arc(),
            index: baseline.index_arc(),
            values: baseline.values().clone(),
        }
    }

    /// Overwrite a named column; the column must already exist
    pub fn set(&mut self, column: &str, value: f64) -> Result<()> {
        let idx = self
            .index
            .get(column)
            .copied()
            .ok_or_else(|| DatecastError::FeatureNotFound(column.to_string()))?;
        self.values[idx] = value;
        Ok(())
    }

    /// Current value of a named column
    pub fn get(&self, column: &str) -> Option<f64> {
        self.index.get(column).map(|&i| self.values[i])
    }

    /// Column names in schema order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in schema order, as the classifier consumes them
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
