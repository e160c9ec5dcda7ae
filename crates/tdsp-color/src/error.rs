//! Error type for color construction, indexing and parsing.

use thiserror::Error;

/// Errors raised by [`ColorValue`](crate::ColorValue) operations.
///
/// Out-of-gamut channel values are never an error; they are only clamped
/// when [`normalized()`](crate::ColorValue::normalized) is called.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Index outside `-3..=2`
    #[error("color index {0} out of range (expected -3..=2)")]
    IndexOutOfRange(isize),

    /// String did not resolve to a color
    #[error("unknown color name: {0:?}")]
    UnknownColorName(String),

    /// Sequence construction given other than 3 values
    #[error("expected 3 color components, got {0}")]
    InvalidArity(usize),

    /// Slice with a step of zero
    #[error("slice step cannot be zero")]
    ZeroSliceStep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ColorError::IndexOutOfRange(3).to_string(),
            "color index 3 out of range (expected -3..=2)"
        );
        assert_eq!(
            ColorError::UnknownColorName("blurple".to_string()).to_string(),
            "unknown color name: \"blurple\""
        );
        assert_eq!(
            ColorError::InvalidArity(4).to_string(),
            "expected 3 color components, got 4"
        );
        assert_eq!(
            ColorError::ZeroSliceStep.to_string(),
            "slice step cannot be zero"
        );
    }
}
