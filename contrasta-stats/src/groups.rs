//! Group aggregation
//!
//! Partitions dataset rows by the categorical column and derives per-group
//! count, mean and sample variance. Groups are views computed fresh on every
//! call; nothing is cached between analyses.

use crate::helpers;
use contrasta_core::{ContrastaError, Dataset};

/// Per-category view over one numeric column
#[derive(Debug, Clone)]
pub struct Group {
    pub label: String,
    pub values: Vec<f64>,
    pub count: usize,
    pub mean: f64,
    /// Sample variance, n-1 denominator
    pub variance: f64,
}

impl Group {
    fn from_values(label: String, values: Vec<f64>) -> Result<Self, ContrastaError> {
        if values.len() < 2 {
            return Err(ContrastaError::insufficient_data(format!(
                "group '{}' has {} observation(s), need at least 2",
                label,
                values.len()
            )));
        }
        let mean = helpers::mean(&values)?;
        let variance = helpers::sample_variance(&values)?;
        Ok(Self {
            label,
            count: values.len(),
            mean,
            variance,
            values,
        })
    }
}

/// One group per distinct label of the category column, in first-appearance
/// order. Fails if any group has fewer than 2 members.
pub fn group_by(dataset: &Dataset, value_column: &str) -> Result<Vec<Group>, ContrastaError> {
    dataset
        .categories()
        .into_iter()
        .map(|label| {
            let values = dataset.filter_by_category(&label, value_column)?;
            Group::from_values(label, values)
        })
        .collect()
}

/// The group for a single label
pub fn group_of(dataset: &Dataset, value_column: &str, label: &str) -> Result<Group, ContrastaError> {
    let values = dataset.filter_by_category(label, value_column)?;
    if values.is_empty() {
        return Err(ContrastaError::insufficient_data(format!(
            "no observations for group '{}'",
            label
        )));
    }
    Group::from_values(label.to_string(), values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contrasta_core::Record;

    fn sample() -> Dataset {
        Dataset::new(
            "transport_mode",
            vec![
                Record::new("maritime").with_field("delivery_days", 2.0),
                Record::new("maritime").with_field("delivery_days", 4.0),
                Record::new("maritime").with_field("delivery_days", 6.0),
                Record::new("land").with_field("delivery_days", 8.0),
                Record::new("land").with_field("delivery_days", 10.0),
                Record::new("land").with_field("delivery_days", 12.0),
            ],
        )
    }

    #[test]
    fn test_group_by_stats() {
        let groups = group_by(&sample(), "delivery_days").unwrap();
        assert_eq!(groups.len(), 2);

        let maritime = &groups[0];
        assert_eq!(maritime.label, "maritime");
        assert_eq!(maritime.count, 3);
        assert_eq!(maritime.mean, 4.0);
        assert_eq!(maritime.variance, 4.0);

        let land = &groups[1];
        assert_eq!(land.mean, 10.0);
        assert_eq!(land.variance, 4.0);
    }

    #[test]
    fn test_singleton_group_rejected() {
        let dataset = Dataset::new(
            "transport_mode",
            vec![
                Record::new("maritime").with_field("delivery_days", 2.0),
                Record::new("maritime").with_field("delivery_days", 4.0),
                Record::new("air").with_field("delivery_days", 1.0),
            ],
        );
        let err = group_by(&dataset, "delivery_days").unwrap_err();
        assert_eq!(err.code(), contrasta_core::codes::INSUFFICIENT_DATA);
    }

    #[test]
    fn test_group_of_unknown_label() {
        let err = group_of(&sample(), "delivery_days", "rail").unwrap_err();
        assert_eq!(err.code(), contrasta_core::codes::INSUFFICIENT_DATA);
    }

    #[test]
    fn test_missing_column_surfaces_schema_error() {
        let err = group_by(&sample(), "weight_kg").unwrap_err();
        assert_eq!(err, ContrastaError::schema("weight_kg"));
    }
}
