use thiserror::Error;

use crate::value::SqlValue;

/// Decode failure for a single value conversion.
///
/// Encoding is total and never produces one of these; every decode path
/// returns a `DecodeError` when the dynamic value does not have the expected
/// shape or a textual literal fails to parse. The message combines the
/// expected kind with a rendering of the offending value, so it can be
/// surfaced to diagnostics as-is. Container codecs propagate the first inner
/// failure verbatim; there is no cause chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DecodeError {
    message: String,
}

impl DecodeError {
    /// Create a decode error from a pre-built message
    pub fn new<S: Into<String>>(message: S) -> Self {
        DecodeError {
            message: message.into(),
        }
    }

    /// Create a shape-mismatch error naming the expected kind and the value
    /// actually found
    pub fn mismatch(expected: &str, found: &SqlValue) -> Self {
        DecodeError::new(format!("expected {expected}, found: {found}"))
    }

    /// The diagnostic message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type alias for decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = DecodeError::new("Date parsing failed for value: nope");
        assert_eq!(err.to_string(), "Date parsing failed for value: nope");
        assert_eq!(err.message(), "Date parsing failed for value: nope");
    }

    #[test]
    fn test_mismatch_renders_found_value() {
        let err = DecodeError::mismatch("Boolean", &SqlValue::Text("yes".to_string()));
        assert_eq!(err.to_string(), "expected Boolean, found: Text(\"yes\")");
    }

    #[test]
    fn test_errors_are_comparable() {
        let a = DecodeError::new("not a buffer");
        let b = DecodeError::new("not a buffer");
        assert_eq!(a, b);
    }
}
