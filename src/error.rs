use crate::Field;

/// Caller errors raised by printer-parsers.
///
/// Text that simply fails to match is not an error; it is reported as
/// [`crate::ParseOutcome::NotMatched`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConverterError {
    /// Parse cursor outside `0..=length`.
    #[error("The position is invalid: {position} (text length {length})")]
    InvalidPosition { position: i64, length: usize },

    /// Printed value needs more digits than allowed.
    #[error("Field {field} cannot be printed as the value {value} exceeds the maximum print width of {max_width}")]
    WidthExceeded { field: Field, value: i64, max_width: usize },

    /// Negative value for a field printed with `SignStyle::NotNegative`.
    #[error("Field {field} cannot be printed as the value {value} cannot be negative according to the SignStyle")]
    NegativeNotAllowed { field: Field, value: i64 },

    /// Width bounds given to a number printer-parser are unusable.
    #[error("Invalid widths for {field}: min {min_width}, max {max_width} (must be 1..=19 with min <= max)")]
    InvalidWidth { field: Field, min_width: usize, max_width: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConverterError::InvalidPosition {
            position: -1,
            length:   3,
        };
        assert_eq!(err.to_string(), "The position is invalid: -1 (text length 3)");

        let err = ConverterError::NegativeNotAllowed {
            field: Field::DayOfMonth,
            value: -4,
        };
        assert!(err.to_string().contains("DayOfMonth"));
        assert!(err.to_string().contains("-4"));
    }
}
