//! Two-sample pooled-variance t-test
//!
//! Assumes equal population variances, matching the documented conclusions
//! of the source system. Which group pairs may be compared at all is an
//! explicit allow-list of unordered label pairs, not string matching
//! scattered across call sites.

use crate::conclusion::{conclude, Conclusion, TestKind};
use crate::distributions::t_cdf;
use crate::groups::group_of;
use crate::helpers::{round2, round4};
use contrasta_core::{ContrastaError, Dataset};
use serde::Serialize;
use std::collections::BTreeSet;

/// Allow-list of unordered label pairs
#[derive(Debug, Clone, Default)]
pub struct ComparisonPolicy {
    pairs: BTreeSet<(String, String)>,
}

fn ordered(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl ComparisonPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: allow one unordered pair
    pub fn allow(mut self, a: &str, b: &str) -> Self {
        self.pairs.insert(ordered(a, b));
        self
    }

    /// All unordered pairs of the given labels
    pub fn pairwise(labels: &[String]) -> Self {
        let mut policy = Self::new();
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                policy.pairs.insert(ordered(a, b));
            }
        }
        policy
    }

    /// Order-insensitive membership. Equal labels are never allowed.
    pub fn allows(&self, a: &str, b: &str) -> bool {
        a != b && self.pairs.contains(&ordered(a, b))
    }

    pub fn validate(&self, a: &str, b: &str) -> Result<(), ContrastaError> {
        if self.allows(a, b) {
            Ok(())
        } else {
            Err(ContrastaError::invalid_comparison(a, b))
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TTestResult {
    pub group1: String,
    pub group2: String,
    pub mean1: f64,
    pub mean2: f64,
    pub variance1: f64,
    pub variance2: f64,
    pub n1: usize,
    pub n2: usize,
    pub t_stat: f64,
    pub p_value: f64,
    pub conclusion: Conclusion,
}

/// Compare the means of two labelled groups over `value_column`
///
/// Pooled variance = ((n1-1)·var1 + (n2-1)·var2) / (n1+n2-2),
/// t = (mean1-mean2)/√(pooled·(1/n1+1/n2)), two-tailed p with n1+n2-2 df.
pub fn compare(
    dataset: &Dataset,
    policy: &ComparisonPolicy,
    value_column: &str,
    label1: &str,
    label2: &str,
) -> Result<TTestResult, ContrastaError> {
    policy.validate(label1, label2)?;

    let g1 = group_of(dataset, value_column, label1)?;
    let g2 = group_of(dataset, value_column, label2)?;

    let n1 = g1.count as f64;
    let n2 = g2.count as f64;
    let df = n1 + n2 - 2.0;

    let pooled = ((n1 - 1.0) * g1.variance + (n2 - 1.0) * g2.variance) / df;
    let se = (pooled * (1.0 / n1 + 1.0 / n2)).sqrt();
    if se == 0.0 {
        return Err(ContrastaError::degenerate_variance(
            "pooled variance is zero, t is undefined",
        ));
    }

    let t_stat = (g1.mean - g2.mean) / se;
    let p_value = 2.0 * (1.0 - t_cdf(t_stat.abs(), df));

    Ok(TTestResult {
        group1: g1.label,
        group2: g2.label,
        mean1: round2(g1.mean),
        mean2: round2(g2.mean),
        variance1: round2(g1.variance),
        variance2: round2(g2.variance),
        n1: g1.count,
        n2: g2.count,
        t_stat: round4(t_stat),
        p_value: round4(p_value),
        conclusion: conclude(p_value, TestKind::MeanComparison),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conclusion::Verdict;
    use contrasta_core::Record;

    fn delivery_dataset() -> Dataset {
        let mut records = Vec::new();
        for v in [2.0, 4.0, 6.0] {
            records.push(Record::new("maritime").with_field("delivery_days", v));
        }
        for v in [8.0, 10.0, 12.0] {
            records.push(Record::new("land").with_field("delivery_days", v));
        }
        Dataset::new("transport_mode", records)
    }

    fn policy() -> ComparisonPolicy {
        ComparisonPolicy::new().allow("maritime", "land")
    }

    #[test]
    fn test_documented_scenario() {
        // Maritime={2,4,6}, Land={8,10,12}: pooled variance 4, df 4,
        // t = (4-10)/sqrt(4*(1/3+1/3)) ≈ -3.674
        let r = compare(&delivery_dataset(), &policy(), "delivery_days", "maritime", "land")
            .unwrap();
        assert_eq!(r.mean1, 4.0);
        assert_eq!(r.mean2, 10.0);
        assert_eq!(r.variance1, 4.0);
        assert_eq!(r.variance2, 4.0);
        assert_eq!((r.n1, r.n2), (3, 3));
        assert!((r.t_stat - -3.6742).abs() < 1e-4);
        assert!(r.p_value < 0.05);
        assert_eq!(r.conclusion.verdict, Verdict::RejectNull);
    }

    #[test]
    fn test_symmetric_up_to_sign() {
        let ab = compare(&delivery_dataset(), &policy(), "delivery_days", "maritime", "land")
            .unwrap();
        let ba = compare(&delivery_dataset(), &policy(), "delivery_days", "land", "maritime")
            .unwrap();
        assert_eq!(ab.t_stat, -ba.t_stat);
        assert_eq!(ab.p_value, ba.p_value);
        assert_eq!(ab.conclusion, ba.conclusion);
    }

    #[test]
    fn test_same_label_rejected() {
        let err = compare(
            &delivery_dataset(),
            &policy(),
            "delivery_days",
            "maritime",
            "maritime",
        )
        .unwrap_err();
        assert_eq!(err, ContrastaError::invalid_comparison("maritime", "maritime"));
    }

    #[test]
    fn test_pair_outside_allow_list() {
        let err = compare(&delivery_dataset(), &policy(), "delivery_days", "maritime", "air")
            .unwrap_err();
        assert_eq!(err.code(), contrasta_core::codes::INVALID_COMPARISON);
    }

    #[test]
    fn test_zero_pooled_variance() {
        let mut records = Vec::new();
        for _ in 0..3 {
            records.push(Record::new("a").with_field("delivery_days", 5.0));
            records.push(Record::new("b").with_field("delivery_days", 5.0));
        }
        let dataset = Dataset::new("transport_mode", records);
        let err = compare(
            &dataset,
            &ComparisonPolicy::new().allow("a", "b"),
            "delivery_days",
            "a",
            "b",
        )
        .unwrap_err();
        assert_eq!(err.code(), contrasta_core::codes::DEGENERATE_VARIANCE);
    }

    #[test]
    fn test_pairwise_policy() {
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let policy = ComparisonPolicy::pairwise(&labels);
        assert!(policy.allows("a", "b"));
        assert!(policy.allows("c", "a"));
        assert!(!policy.allows("a", "a"));
        assert!(!policy.allows("a", "d"));
    }

    #[test]
    fn test_small_group_insufficient() {
        let records = vec![
            Record::new("a").with_field("delivery_days", 1.0),
            Record::new("b").with_field("delivery_days", 2.0),
            Record::new("b").with_field("delivery_days", 3.0),
        ];
        let dataset = Dataset::new("transport_mode", records);
        let err = compare(
            &dataset,
            &ComparisonPolicy::new().allow("a", "b"),
            "delivery_days",
            "a",
            "b",
        )
        .unwrap_err();
        assert_eq!(err.code(), contrasta_core::codes::INSUFFICIENT_DATA);
    }
}
