//! Analysis facade
//!
//! The surface the host layer drives. Owns a shared, read-only dataset and a
//! configured response column; every call recomputes from the dataset, so
//! concurrent callers need no coordination.

use crate::anova::{one_way, AnovaResult};
use crate::groups::group_by;
use crate::regression::{fit, RegressionResult};
use crate::ttest::{compare, ComparisonPolicy, TTestResult};
use contrasta_core::{ContrastaError, Dataset};
use std::sync::Arc;

/// Where the regression input comes from
#[derive(Debug, Clone)]
pub enum RegressionInput {
    /// Two named numeric columns of the dataset
    Columns { x: String, y: String },
    /// Caller-supplied paired values
    Points { x: Vec<f64>, y: Vec<f64> },
}

pub struct Analyzer {
    dataset: Arc<Dataset>,
    response_column: String,
    comparisons: ComparisonPolicy,
}

impl Analyzer {
    /// Build over a dataset, allowing every pairwise comparison between the
    /// categories it contains
    pub fn new(dataset: Arc<Dataset>, response_column: impl Into<String>) -> Self {
        let comparisons = ComparisonPolicy::pairwise(&dataset.categories());
        Self {
            dataset,
            response_column: response_column.into(),
            comparisons,
        }
    }

    /// Builder: restrict the comparison allow-list
    pub fn with_comparisons(mut self, comparisons: ComparisonPolicy) -> Self {
        self.comparisons = comparisons;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Labels available for comparison, in first-appearance order
    pub fn categories(&self) -> Vec<String> {
        self.dataset.categories()
    }

    pub fn run_t_test(&self, label1: &str, label2: &str) -> Result<TTestResult, ContrastaError> {
        compare(
            &self.dataset,
            &self.comparisons,
            &self.response_column,
            label1,
            label2,
        )
    }

    pub fn run_anova(&self) -> Result<AnovaResult, ContrastaError> {
        let groups = group_by(&self.dataset, &self.response_column)?;
        one_way(&groups)
    }

    pub fn run_regression(&self, input: RegressionInput) -> Result<RegressionResult, ContrastaError> {
        let (x, y) = match input {
            RegressionInput::Columns { x, y } => {
                (self.dataset.column(&x)?, self.dataset.column(&y)?)
            }
            RegressionInput::Points { x, y } => (x, y),
        };
        fit(&x, &y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conclusion::Verdict;
    use contrasta_core::Record;

    fn delivery_dataset() -> Arc<Dataset> {
        let mut records = Vec::new();
        for (days, years) in [(2.0, 8.0), (4.0, 6.0), (6.0, 5.0)] {
            records.push(
                Record::new("maritime")
                    .with_field("delivery_days", days)
                    .with_field("experience_years", years),
            );
        }
        for (days, years) in [(8.0, 3.0), (10.0, 2.0), (12.0, 1.0)] {
            records.push(
                Record::new("land")
                    .with_field("delivery_days", days)
                    .with_field("experience_years", years),
            );
        }
        Arc::new(Dataset::new("transport_mode", records))
    }

    fn analyzer() -> Analyzer {
        Analyzer::new(delivery_dataset(), "delivery_days")
    }

    #[test]
    fn test_categories() {
        assert_eq!(analyzer().categories(), vec!["maritime", "land"]);
    }

    #[test]
    fn test_run_t_test() {
        let r = analyzer().run_t_test("maritime", "land").unwrap();
        assert_eq!(r.conclusion.verdict, Verdict::RejectNull);
    }

    #[test]
    fn test_run_t_test_same_label() {
        let err = analyzer().run_t_test("maritime", "maritime").unwrap_err();
        assert_eq!(err.code(), contrasta_core::codes::INVALID_COMPARISON);
    }

    #[test]
    fn test_run_anova() {
        let r = analyzer().run_anova().unwrap();
        assert!((r.ss_total - (r.ss_between + r.ss_within)).abs() < 1e-6);
    }

    #[test]
    fn test_run_regression_from_columns() {
        let r = analyzer()
            .run_regression(RegressionInput::Columns {
                x: "experience_years".into(),
                y: "delivery_days".into(),
            })
            .unwrap();
        // More experience, faster delivery
        assert!(r.slope < 0.0);
        assert!(r.r_squared > 0.9);
    }

    #[test]
    fn test_run_regression_missing_column() {
        let err = analyzer()
            .run_regression(RegressionInput::Columns {
                x: "weight_kg".into(),
                y: "delivery_days".into(),
            })
            .unwrap_err();
        assert_eq!(err, ContrastaError::schema("weight_kg"));
    }

    #[test]
    fn test_run_regression_from_points() {
        let r = analyzer()
            .run_regression(RegressionInput::Points {
                x: vec![1.0, 2.0, 3.0, 4.0],
                y: vec![2.0, 4.0, 6.0, 8.0],
            })
            .unwrap();
        assert_eq!(r.slope, 2.0);
        assert_eq!(r.intercept, 0.0);
    }

    #[test]
    fn test_restricted_policy() {
        let analyzer = Analyzer::new(delivery_dataset(), "delivery_days")
            .with_comparisons(ComparisonPolicy::new());
        let err = analyzer.run_t_test("maritime", "land").unwrap_err();
        assert_eq!(err.code(), contrasta_core::codes::INVALID_COMPARISON);
    }
}
