//! One-way fixed-effects ANOVA

use crate::conclusion::{conclude, Conclusion, TestKind};
use crate::distributions::f_cdf;
use crate::groups::Group;
use crate::helpers::{round2, round4};
use contrasta_core::ContrastaError;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct AnovaResult {
    /// Between-groups sum of squares (SCG)
    pub ss_between: f64,
    /// Within-groups sum of squares (SCE)
    pub ss_within: f64,
    /// Total sum of squares (SCT = SCG + SCE)
    pub ss_total: f64,
    /// Mean square between (MCG)
    pub ms_between: f64,
    /// Mean square within (MCE)
    pub ms_within: f64,
    pub f_stat: f64,
    pub p_value: f64,
    pub df_between: usize,
    pub df_within: usize,
    pub grand_mean: f64,
    /// Per-group means, rounded for display
    pub group_means: BTreeMap<String, f64>,
    pub conclusion: Conclusion,
}

/// One-way ANOVA over pre-aggregated groups
///
/// SCG = Σ n_g·(mean_g - grand)², SCE = Σ_g Σ_x (x - mean_g)²,
/// F = MCG/MCE with (k-1, N-k) degrees of freedom,
/// p = upper tail of the F distribution at F.
pub fn one_way(groups: &[Group]) -> Result<AnovaResult, ContrastaError> {
    if groups.len() < 2 {
        return Err(ContrastaError::insufficient_data(format!(
            "ANOVA requires at least 2 groups, got {}",
            groups.len()
        )));
    }
    if let Some(empty) = groups.iter().find(|g| g.values.is_empty()) {
        return Err(ContrastaError::insufficient_data(format!(
            "group '{}' is empty",
            empty.label
        )));
    }

    let total_n: usize = groups.iter().map(|g| g.count).sum();
    let total_sum: f64 = groups.iter().flat_map(|g| g.values.iter()).sum();
    let grand_mean = total_sum / total_n as f64;

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for g in groups {
        ss_between += g.count as f64 * (g.mean - grand_mean) * (g.mean - grand_mean);
        for x in &g.values {
            ss_within += (x - g.mean) * (x - g.mean);
        }
    }
    let ss_total = ss_between + ss_within;

    let df_between = groups.len() - 1;
    let df_within = total_n - groups.len();

    let ms_between = ss_between / df_between as f64;
    let ms_within = ss_within / df_within as f64;
    if ms_within == 0.0 {
        return Err(ContrastaError::degenerate_variance(
            "within-group mean square is zero, F is undefined",
        ));
    }

    let f_stat = ms_between / ms_within;
    let p_value = 1.0 - f_cdf(f_stat, df_between as f64, df_within as f64);

    let group_means = groups
        .iter()
        .map(|g| (g.label.clone(), round2(g.mean)))
        .collect();

    Ok(AnovaResult {
        ss_between: round4(ss_between),
        ss_within: round4(ss_within),
        ss_total: round4(ss_total),
        ms_between: round4(ms_between),
        ms_within: round4(ms_within),
        f_stat: round4(f_stat),
        p_value: round4(p_value),
        df_between,
        df_within,
        grand_mean: round2(grand_mean),
        group_means,
        conclusion: conclude(p_value, TestKind::GroupDifferences),
    })
}
