// ============================================================================
// Shared Kernel - Validation Errors
// ============================================================================
//
// Generic validation failures returned by value-object and entity
// constructors. `Display` carries the human-readable message, `code()` the
// stable machine-readable code a surrounding service layer can translate.
//
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("{field} is required and must not be blank")]
    Required { field: &'static str },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("{field} must be greater or equal to {min}, got {value}")]
    BelowMinimum {
        field: &'static str,
        value: i32,
        min: i32,
    },
}

impl ValueError {
    /// Stable machine-readable code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Required { .. } => "value.is.required",
            Self::OutOfRange { .. } => "value.is.out.of.range",
            Self::BelowMinimum { .. } => "value.must.be.greater.or.equal",
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            ValueError::Required { field: "name" }.code(),
            "value.is.required"
        );
        assert_eq!(
            ValueError::OutOfRange {
                field: "x",
                value: 11,
                min: 1,
                max: 10
            }
            .code(),
            "value.is.out.of.range"
        );
        assert_eq!(
            ValueError::BelowMinimum {
                field: "value",
                value: 0,
                min: 1
            }
            .code(),
            "value.must.be.greater.or.equal"
        );
    }

    #[test]
    fn test_messages_carry_field_and_bounds() {
        let error = ValueError::OutOfRange {
            field: "y",
            value: 0,
            min: 1,
            max: 10,
        };
        assert_eq!(error.to_string(), "y must be between 1 and 10, got 0");

        let error = ValueError::BelowMinimum {
            field: "speed",
            value: -3,
            min: 1,
        };
        assert_eq!(error.to_string(), "speed must be greater or equal to 1, got -3");
    }
}
