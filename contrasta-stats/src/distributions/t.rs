//! Student's t distribution

use super::regularized_incomplete_beta;

/// CDF of Student's t with `df` degrees of freedom
///
/// Expressed through the regularized incomplete beta:
/// P(T ≤ x) = 1 - I_p(df/2, 1/2)/2 for x ≥ 0, with p = df/(df + x²).
pub fn t_cdf(x: f64, df: f64) -> f64 {
    let p = df / (df + x * x);

    if x >= 0.0 {
        1.0 - 0.5 * regularized_incomplete_beta(df / 2.0, 0.5, p)
    } else {
        0.5 * regularized_incomplete_beta(df / 2.0, 0.5, p)
    }
}
