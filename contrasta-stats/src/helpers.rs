//! Shared numeric helpers for the statistical layer

use contrasta_core::ContrastaError;

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

pub fn mean(values: &[f64]) -> Result<f64, ContrastaError> {
    if values.is_empty() {
        return Err(ContrastaError::insufficient_data(
            "cannot take the mean of an empty series",
        ));
    }
    Ok(sum(values) / values.len() as f64)
}

/// Sample variance with n-1 denominator
pub fn sample_variance(values: &[f64]) -> Result<f64, ContrastaError> {
    let n = values.len();
    if n < 2 {
        return Err(ContrastaError::insufficient_data(format!(
            "sample variance requires at least 2 values, got {}",
            n
        )));
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|x| (x - m) * (x - m)).sum();
    Ok(ss / (n - 1) as f64)
}

/// Round to 4 decimals. Used only at result construction.
pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Round to 2 decimals, for display means.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
