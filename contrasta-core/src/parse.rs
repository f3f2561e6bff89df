//! Parsing of user-supplied numeric text
//!
//! The regression engine's manual mode receives raw text pairs from the host.
//! Parsing failures carry the offending token so the host can point at it.

use crate::error::ContrastaError;

/// Parse one token into a finite float
pub fn parse_value(token: &str) -> Result<f64, ContrastaError> {
    let trimmed = token.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ContrastaError::invalid_input(trimmed))
}

/// Parse a series of tokens, failing on the first bad one
pub fn parse_series<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<f64>, ContrastaError> {
    tokens.iter().map(|t| parse_value(t.as_ref())).collect()
}
