//! Structural encoding errors.

use thiserror::Error;

/// Errors raised by strict parsing and by serialization.
///
/// These cover only the structural invariants needed for interoperability
/// (BEGIN/END pairing, VERSION presence, FN presence). Lenient parsing never
/// raises [`EncodingError::MissingVersion`] or
/// [`EncodingError::MissingFullName`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    /// A `BEGIN:VCARD` line was seen but no `END:VCARD` line followed.
    #[error("vCards must end with an END:VCARD line")]
    MissingEnd,

    /// A second `BEGIN:VCARD` line appeared before the matching END.
    #[error("vCard has more than one BEGIN:VCARD line")]
    UnexpectedBegin,

    /// Strict parsing completed without a `VERSION` line.
    #[error("vCards must include a VERSION field")]
    MissingVersion,

    /// No `FN` property was present at parse or serialization time.
    #[error("vCards must include an FN field")]
    MissingFullName,
}

/// Result type for codec operations.
pub type EncodingResult<T> = std::result::Result<T, EncodingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            EncodingError::MissingEnd.to_string(),
            "vCards must end with an END:VCARD line"
        );
        assert_eq!(
            EncodingError::UnexpectedBegin.to_string(),
            "vCard has more than one BEGIN:VCARD line"
        );
        assert_eq!(
            EncodingError::MissingVersion.to_string(),
            "vCards must include a VERSION field"
        );
        assert_eq!(
            EncodingError::MissingFullName.to_string(),
            "vCards must include an FN field"
        );
    }

    #[test]
    fn error_as_std_error() {
        let err = EncodingError::MissingEnd;
        let _: &dyn std::error::Error = &err;
    }
}
