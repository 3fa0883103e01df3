//! Baseline row of per-column dataset averages
//!
//! The trained model expects 27+ columns; the form only asks about 13 of
//! them. The remaining columns are filled from this one-row CSV of dataset
//! means, loaded once at startup and immutable afterwards. Its column order
//! is authoritative for every feature vector built against it.

use crate::error::{DatecastError, Result};
use ndarray::Array1;
use polars::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// One row of default feature values keyed by column name
#[derive(Debug, Clone)]
pub struct BaselineRow {
    columns: Arc<Vec<String>>,
    index: Arc<HashMap<String, usize>>,
    values: Array1<f64>,
}

impl BaselineRow {
    /// Load the baseline from a one-row CSV; a missing file is a fatal
    /// startup condition with a user-explanatory message
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DatecastError::ArtifactMissing {
                kind: "baseline",
                path: path.to_path_buf(),
            });
        }

        let df = CsvReadOptions::default()
            .with_infer_schema_length(Some(16))
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;

        if df.height() != 1 {
            return Err(DatecastError::InvalidArtifact {
                kind: "baseline",
                reason: format!("expected exactly one row of averages, got {}", df.height()),
            });
        }

        let mut pairs = Vec::with_capacity(df.width());
        for col in df.get_columns() {
            let name = col.name().to_string();
            let value = col
                .cast(&DataType::Float64)?
                .f64()?
                .get(0)
                .ok_or_else(|| DatecastError::InvalidArtifact {
                    kind: "baseline",
                    reason: format!("column '{}' holds no numeric value", name),
                })?;
            pairs.push((name, value));
        }

        Self::from_columns(pairs)
    }

    /// Build a baseline directly from (name, value) pairs in column order
    pub fn from_columns(pairs: Vec<(String, f64)>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(DatecastError::InvalidArtifact {
                kind: "baseline",
                reason: "baseline has no columns".to_string(),
            });
        }

        let mut columns = Vec::with_capacity(pairs.len());
        let mut index = HashMap::with_capacity(pairs.len());
        let mut values = Vec::with_capacity(pairs.len());
        for (pos, (name, value)) in pairs.into_iter().enumerate() {
            if index.insert(name.clone(), pos).is_some() {
                return Err(DatecastError::InvalidArtifact {
                    kind: "baseline",
                    reason: format!("duplicate column '{}'", name),
                });
            }
            columns.push(name);
            values.push(value);
        }

        Ok(Self {
            columns: Arc::new(columns),
            index: Arc::new(index),
            values: Array1::from_vec(values),
        })
    }

    /// Column names in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Default value for a column, if present
    pub fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&i| self.values[i])
    }

    /// Raw values in column order
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub(crate) fn columns_arc(&self) -> Arc<Vec<String>> {
        Arc::clone(&self.columns)
    }

    pub(crate) fn index_arc(&self) -> Arc<HashMap<String, usize>> {
        Arc::clone(&self.index)
    }
}
