//! Immutable in-memory dataset
//!
//! Loaded once at process start, read many times after. No mutation API
//! exists, so sharing it behind `Arc` across concurrent analysis calls is
//! safe without locking.

use crate::error::ContrastaError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row: a category label plus named numeric measurements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub category: String,
    pub fields: BTreeMap<String, f64>,
}

impl Record {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder: add a numeric field
    pub fn with_field(mut self, name: impl Into<String>, value: f64) -> Self {
        self.fields.insert(name.into(), value);
        self
    }
}

/// Ordered, read-only table of records with one categorical column
///
/// Schema is checked lazily, per analysis request, not at load time: a
/// dataset may carry columns no analysis ever asks for, and a missing column
/// only surfaces when something needs it.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    category_column: String,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(category_column: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            category_column: category_column.into(),
            records,
        }
    }

    /// Parse a JSON array of row objects
    ///
    /// `category_column` must be present in every row as a string; every
    /// other key must hold a finite number.
    pub fn from_json(text: &str, category_column: &str) -> Result<Self, ContrastaError> {
        let rows: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| ContrastaError::invalid_input(e.to_string()))?;

        let rows = rows
            .as_array()
            .ok_or_else(|| ContrastaError::invalid_input("expected a JSON array of rows"))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let obj = row
                .as_object()
                .ok_or_else(|| ContrastaError::invalid_input(row.to_string()))?;

            let category = obj
                .get(category_column)
                .and_then(|v| v.as_str())
                .ok_or_else(|| ContrastaError::schema(category_column))?;

            let mut record = Record::new(category);
            for (key, value) in obj {
                if key == category_column {
                    continue;
                }
                let number = value
                    .as_f64()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| ContrastaError::invalid_input(value.to_string()))?;
                record.fields.insert(key.clone(), number);
            }
            records.push(record);
        }

        Ok(Self::new(category_column, records))
    }

    pub fn category_column(&self) -> &str {
        &self.category_column
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct category labels in first-appearance order
    pub fn categories(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for record in &self.records {
            if !labels.iter().any(|l| l == &record.category) {
                labels.push(record.category.clone());
            }
        }
        labels
    }

    /// All values of a numeric column, in row order
    ///
    /// A record without the column is a precondition violation, surfaced as
    /// a schema error rather than silently skipped.
    pub fn column(&self, name: &str) -> Result<Vec<f64>, ContrastaError> {
        self.records
            .iter()
            .map(|r| {
                r.fields
                    .get(name)
                    .copied()
                    .ok_or_else(|| ContrastaError::schema(name))
            })
            .collect()
    }

    /// Values of `column` restricted to rows labelled `label`. Linear scan.
    pub fn filter_by_category(&self, label: &str, column: &str) -> Result<Vec<f64>, ContrastaError> {
        self.records
            .iter()
            .filter(|r| r.category == label)
            .map(|r| {
                r.fields
                    .get(column)
                    .copied()
                    .ok_or_else(|| ContrastaError::schema(column))
            })
            .collect()
    }
}
