//! Conclusion policy
//!
//! Shared rule mapping a p-value to a hypothesis verdict at the fixed
//! significance level, with the fixed bilingual text each test reports.

use serde::Serialize;

/// Fixed significance level for every test
pub const ALPHA: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    RejectNull,
    FailToRejectNull,
}

impl Verdict {
    pub fn from_p_value(p_value: f64) -> Self {
        // NaN compares false, ending up on the conservative side
        if p_value < ALPHA {
            Self::RejectNull
        } else {
            Self::FailToRejectNull
        }
    }
}

/// Which null hypothesis the conclusion talks about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    /// H0: the two group means are equal
    MeanComparison,
    /// H0: all group means are equal
    GroupDifferences,
    /// H0: the slope is zero
    LinearRelation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conclusion {
    pub verdict: Verdict,
    /// Primary text, Spanish (the wording the source system documents)
    pub text: &'static str,
    pub text_en: &'static str,
}

/// Derive the conclusion for a test's p-value
pub fn conclude(p_value: f64, kind: TestKind) -> Conclusion {
    let verdict = Verdict::from_p_value(p_value);
    let (text, text_en) = match (kind, verdict) {
        (TestKind::MeanComparison, Verdict::RejectNull) => (
            "Se rechaza H0, hay diferencia significativa.",
            "Reject H0: the group means differ significantly.",
        ),
        (TestKind::MeanComparison, Verdict::FailToRejectNull) => (
            "No se rechaza H0, no hay diferencia significativa.",
            "Fail to reject H0: no significant difference between means.",
        ),
        (TestKind::GroupDifferences, Verdict::RejectNull) => (
            "Se rechaza H0. Hay al menos una diferencia significativa entre los grupos.",
            "Reject H0: at least one group mean differs significantly.",
        ),
        (TestKind::GroupDifferences, Verdict::FailToRejectNull) => (
            "No se rechaza H0. No hay diferencias significativas entre los grupos.",
            "Fail to reject H0: no significant differences between groups.",
        ),
        (TestKind::LinearRelation, Verdict::RejectNull) => (
            "Se rechaza H0. Hay relación significativa.",
            "Reject H0: there is a significant linear relation.",
        ),
        (TestKind::LinearRelation, Verdict::FailToRejectNull) => (
            "No se rechaza H0. No hay relación significativa.",
            "Fail to reject H0: no significant linear relation.",
        ),
    };
    Conclusion { verdict, text, text_en }
}
