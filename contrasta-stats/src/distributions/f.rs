//! F distribution

use super::regularized_incomplete_beta;

/// CDF of the F distribution with (d1, d2) degrees of freedom
///
/// P(F ≤ x) = I_z(d1/2, d2/2) with z = d1·x/(d1·x + d2).
pub fn f_cdf(x: f64, d1: f64, d2: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }

    let z = d1 * x / (d1 * x + d2);
    regularized_incomplete_beta(d1 / 2.0, d2 / 2.0, z)
}
