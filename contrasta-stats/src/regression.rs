//! Simple OLS linear regression
//!
//! Fits y = intercept + slope·x by least squares. Source-agnostic: the two
//! sequences may come from dataset columns or from user-entered points, the
//! fit never knows which.

use crate::conclusion::{conclude, Conclusion, TestKind};
use crate::distributions::t_cdf;
use crate::helpers::{mean, round4};
use contrasta_core::ContrastaError;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RegressionResult {
    pub intercept: f64,
    pub slope: f64,
    pub r_squared: f64,
    /// Two-tailed p-value of the slope coefficient
    pub p_value: f64,
    pub conclusion: Conclusion,
}

/// Least-squares fit with an intercept term
///
/// slope = Σ(x-x̄)(y-ȳ) / Σ(x-x̄)², intercept = ȳ - slope·x̄,
/// R² = 1 - SSres/SStot, slope p-value from t = slope/SE(slope) with
/// n-2 degrees of freedom.
pub fn fit(x: &[f64], y: &[f64]) -> Result<RegressionResult, ContrastaError> {
    if x.len() != y.len() {
        return Err(ContrastaError::insufficient_data(format!(
            "x and y must have equal length: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    let n = x.len();
    if n < 2 {
        return Err(ContrastaError::insufficient_data(format!(
            "regression requires at least 2 points, got {}",
            n
        )));
    }

    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let mut s_xy = 0.0;
    let mut s_xx = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        s_xy += (xi - mean_x) * (yi - mean_y);
        s_xx += (xi - mean_x) * (xi - mean_x);
    }
    if s_xx == 0.0 {
        return Err(ContrastaError::degenerate_variance(
            "x has zero variance, the fit is undefined",
        ));
    }

    let slope = s_xy / s_xx;
    let intercept = mean_y - slope * mean_x;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let predicted = intercept + slope * xi;
        ss_res += (yi - predicted) * (yi - predicted);
        ss_tot += (yi - mean_y) * (yi - mean_y);
    }

    // Constant y fits itself exactly
    let r_squared = if ss_tot == 0.0 { 1.0 } else { 1.0 - ss_res / ss_tot };

    let df = (n - 2) as f64;
    let p_value = if df == 0.0 {
        // Two points always fit exactly; the slope has no sampling error
        // to test against.
        1.0
    } else {
        let se_slope = ((ss_res / df) / s_xx).sqrt();
        if se_slope == 0.0 {
            0.0
        } else {
            let t_stat = slope / se_slope;
            2.0 * (1.0 - t_cdf(t_stat.abs(), df))
        }
    };

    Ok(RegressionResult {
        intercept: round4(intercept),
        slope: round4(slope),
        r_squared: round4(r_squared),
        p_value: round4(p_value),
        conclusion: conclude(p_value, TestKind::LinearRelation),
    })
}
