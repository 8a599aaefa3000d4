use std::fmt;

use serde::Serialize;

use crate::document::scheme::VERIFIER_DIGIT_COUNT;
use crate::document::DocumentKind;
use crate::error::InvalidDocument;

/// A document number that passed validation, stored as its cleaned digits.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Document {
    kind: DocumentKind,
    digits: String,
}

impl Document {
    pub fn parse(kind: DocumentKind, input: &str) -> Result<Self, InvalidDocument> {
        let digits = kind.check(input)?;
        Ok(Document { kind, digits })
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn verifier_digits(&self) -> &str {
        &self.digits[self.digits.len() - VERIFIER_DIGIT_COUNT..]
    }

    pub fn masked(&self) -> String {
        // digits always has the scheme's length, so masking cannot fail
        self.kind
            .mask(&self.digits)
            .unwrap_or_else(|_| self.digits.clone())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}
