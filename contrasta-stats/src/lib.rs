//! Contrasta statistical layer
//!
//! Three classical inference procedures over a categorical dataset: a
//! pooled-variance two-sample t-test, one-way ANOVA, and simple OLS
//! regression. Each engine returns a fully populated result or a
//! `ContrastaError` - no partial output. Intermediate arithmetic runs in
//! full f64 precision; rounding happens exactly once, when a result is
//! constructed.

mod helpers;
mod distributions;
mod groups;
mod conclusion;
mod ttest;
mod anova;
mod regression;
mod analyzer;

pub use analyzer::{Analyzer, RegressionInput};
pub use anova::{one_way, AnovaResult};
pub use conclusion::{conclude, Conclusion, TestKind, Verdict, ALPHA};
pub use distributions::{f_cdf, t_cdf};
pub use groups::{group_by, group_of, Group};
pub use regression::{fit, RegressionResult};
pub use ttest::{compare, ComparisonPolicy, TTestResult};
