//! Contrasta core types
//!
//! The foundation the statistical layer reads from: an immutable in-memory
//! dataset, the shared error type, and parsing of user-supplied numeric text.
//! Errors are values that propagate through computations - nothing panics.

mod dataset;
mod error;
mod parse;

pub use dataset::{Dataset, Record};
pub use error::{codes, ContrastaError};
pub use parse::{parse_series, parse_value};
