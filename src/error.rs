use thiserror::Error;

use crate::document::DocumentKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("{kind} must have {expected} digits, got {actual}")]
    WrongLength {
        kind: DocumentKind,
        expected: usize,
        actual: usize,
    },
}

/// Reason a document number was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDocument {
    #[error(transparent)]
    WrongLength(#[from] FormatError),

    /// Every digit is the same. These pass the checksum arithmetic but are never issued.
    #[error("{kind} made of a single repeated digit")]
    RepeatedDigits { kind: DocumentKind },

    #[error("{kind} verifier digits mismatch: expected {expected}, found {found}")]
    ChecksumMismatch {
        kind: DocumentKind,
        expected: String,
        found: String,
    },
}

impl InvalidDocument {
    /// Short label used in logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            InvalidDocument::WrongLength(_) => "wrong_length",
            InvalidDocument::RepeatedDigits { .. } => "repeated_digits",
            InvalidDocument::ChecksumMismatch { .. } => "checksum_mismatch",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FormatError::WrongLength {
            kind: DocumentKind::Cpf,
            expected: 11,
            actual: 5,
        };
        assert_eq!(err.to_string(), "CPF must have 11 digits, got 5");

        let invalid: InvalidDocument = err.into();
        assert_eq!(invalid.to_string(), "CPF must have 11 digits, got 5");
        assert_eq!(invalid.reason(), "wrong_length");

        let invalid = InvalidDocument::ChecksumMismatch {
            kind: DocumentKind::Cnpj,
            expected: "81".to_string(),
            found: "82".to_string(),
        };
        assert_eq!(
            invalid.to_string(),
            "CNPJ verifier digits mismatch: expected 81, found 82"
        );
    }
}
