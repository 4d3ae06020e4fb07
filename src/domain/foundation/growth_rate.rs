//! Growth rate value object parsed from a percentage label.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A growth rate such as `"36.1%"`.
///
/// The label is kept verbatim for display; `value` is the numeric
/// percentage used for ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthRate {
    label: String,
    value: f64,
}

impl GrowthRate {
    /// Parses a percentage label, stripping trailing `%` signs.
    pub fn parse(label: &str) -> Result<Self, ValidationError> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("growth_rate"));
        }
        let number = trimmed.trim_end_matches('%').trim_end();
        let value: f64 = number.parse().map_err(|_| {
            ValidationError::invalid_format("growth_rate", format!("'{}' is not a percentage", label))
        })?;
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "growth_rate",
                format!("'{}' is not finite", label),
            ));
        }
        Ok(Self {
            label: label.to_string(),
            value,
        })
    }

    /// Returns the original label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the numeric percentage (36.1 for `"36.1%"`).
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl FromStr for GrowthRate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GrowthRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
