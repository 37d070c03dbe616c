//! Error types for the `aerolink-models` crate.
//!
//! All fallible constructors and `TryFrom` implementations in this crate
//! return variants of [`ModelError`].

/// Errors produced when constructing or validating model types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// A record identifier (callsign, article title) was empty.
    #[error("empty {field}")]
    EmptyIdentifier {
        /// Which identifier was empty.
        field: &'static str,
    },

    /// A numeric field was NaN, infinite, or outside its declared bounds.
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        /// The name of the offending field.
        field: &'static str,
        /// The value that failed validation.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// A required field was missing from a remote record.
    #[error("missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },
}

/// Check that `value` is finite and lies within `[min, max]`.
pub(crate) fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, ModelError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ModelError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_empty_identifier() {
        let err = ModelError::EmptyIdentifier { field: "callsign" };
        assert_eq!(err.to_string(), "empty callsign");
    }

    #[test]
    fn error_display_out_of_range() {
        let err = ModelError::OutOfRange {
            field: "credibility",
            value: 120.0,
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "credibility = 120 is outside [0, 100]");
    }

    #[test]
    fn error_display_missing_field() {
        let err = ModelError::MissingField {
            field: "live".into(),
        };
        assert_eq!(err.to_string(), "missing required field: live");
    }

    #[test]
    fn check_range_rejects_non_finite() {
        assert!(check_range("altitude", f64::NAN, 0.0, 1.0).is_err());
        assert!(check_range("altitude", f64::INFINITY, 0.0, 1.0).is_err());
        assert_eq!(check_range("altitude", 1.0, 0.0, 1.0), Ok(1.0));
    }
}
