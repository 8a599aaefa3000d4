use rand::Rng;
use regex::RegexSet;

use crate::digits::{clean, digit_char, is_repeated_digit, to_digits};
use crate::document::DocumentKind;
use crate::error::{FormatError, InvalidDocument};
use crate::observability::{record_generated, record_mask_error, record_validation};

const MODULUS: u32 = 11;

/// Number of trailing verifier digits. Both CPF and CNPJ carry two.
pub const VERIFIER_DIGIT_COUNT: usize = 2;

/// A weighted mod-11 check digit scheme with two verifier digits.
///
/// The first verifier digit is computed over the first `partial_length` digits with
/// `first_weights`, the second one over the first `partial_length + 1` digits with
/// `second_weights`. The mask layout is described by `groups` (number of digits per
/// group) and `separators` (the punctuation placed between consecutive groups).
#[derive(Debug)]
pub struct CheckDigitScheme {
    pub kind: DocumentKind,
    pub length: usize,
    pub partial_length: usize,
    pub first_weights: &'static [u32],
    pub second_weights: &'static [u32],
    pub groups: &'static [usize],
    pub separators: &'static [char],
}

/// Weighted sum of `digits`, reduced mod 11. A remainder below 2 gives 0, anything else
/// gives `11 - remainder`, so the result is always a single decimal digit.
///
/// `digits` and `weights` are expected to have the same length; extra entries on either
/// side are ignored.
pub fn calculate_digit(digits: &[u32], weights: &[u32]) -> u32 {
    debug_assert_eq!(digits.len(), weights.len());
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % MODULUS;
    if remainder < 2 {
        0
    } else {
        MODULUS - remainder
    }
}

impl CheckDigitScheme {
    /// Returns the cleaned digits if `input` is a valid document, or why it isn't.
    pub fn check(&self, input: &str) -> Result<String, InvalidDocument> {
        let cleaned = clean(input);
        if cleaned.len() != self.length {
            return Err(self.wrong_length(cleaned.len()).into());
        }
        if is_repeated_digit(&cleaned) {
            return Err(InvalidDocument::RepeatedDigits { kind: self.kind });
        }

        let digits = to_digits(&cleaned);
        let first = calculate_digit(&digits[..self.partial_length], self.first_weights);
        // The second digit is weighted over the input's own digit at the first verifier
        // position, not the one just computed.
        let second = calculate_digit(&digits[..self.partial_length + 1], self.second_weights);

        let expected = format!("{first}{second}");
        let found = &cleaned[self.length - VERIFIER_DIGIT_COUNT..];
        if found != expected {
            return Err(InvalidDocument::ChecksumMismatch {
                kind: self.kind,
                expected,
                found: found.to_string(),
            });
        }
        Ok(cleaned)
    }

    pub fn validate(&self, input: &str) -> bool {
        let result = self.check(input);
        if let Err(err) = &result {
            tracing::debug!(document = %self.kind, reason = err.reason(), "rejected document");
        }
        record_validation(self.kind.label(), result.is_ok());
        result.is_ok()
    }

    /// Computes both verifier digits for a `partial_length` prefix. The second digit is
    /// chained on the freshly computed first one.
    pub fn verifier_digits(&self, partial: &[u32]) -> [u32; VERIFIER_DIGIT_COUNT] {
        let first = calculate_digit(partial, self.first_weights);
        let mut extended = Vec::with_capacity(partial.len() + 1);
        extended.extend_from_slice(partial);
        extended.push(first);
        let second = calculate_digit(&extended, self.second_weights);
        [first, second]
    }

    /// Formats the document with its punctuation (e.g. `###.###.###-##`).
    pub fn mask(&self, input: &str) -> Result<String, FormatError> {
        let cleaned = clean(input);
        if cleaned.len() != self.length {
            record_mask_error(self.kind.label());
            return Err(self.wrong_length(cleaned.len()));
        }

        let mut masked = String::with_capacity(self.length + self.separators.len());
        let mut rest = cleaned.as_str();
        for (idx, group_len) in self.groups.iter().enumerate() {
            let (group, tail) = rest.split_at(*group_len);
            masked.push_str(group);
            if let Some(separator) = self.separators.get(idx) {
                masked.push(*separator);
            }
            rest = tail;
        }
        Ok(masked)
    }

    pub fn unmask(&self, input: &str) -> String {
        clean(input)
    }

    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generates a random valid document using the given random source.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        loop {
            let partial: Vec<u32> = (0..self.partial_length)
                .map(|_| rng.gen_range(0..10))
                .collect();
            let verifier = self.verifier_digits(&partial);

            let generated: String = partial
                .iter()
                .chain(verifier.iter())
                .filter_map(|d| digit_char(*d))
                .collect();

            // Single repeated digit sequences are self-consistent but always rejected
            if !is_repeated_digit(&generated) {
                record_generated(self.kind.label());
                return generated;
            }
        }
    }

    /// The accepted input shapes: fully masked, raw digits, and partially typed.
    pub fn format_patterns(&self) -> [String; 3] {
        let mut masked = String::from("^");
        let mut partial = String::from("^");
        for (idx, group_len) in self.groups.iter().enumerate() {
            let separator = idx
                .checked_sub(1)
                .and_then(|prev| self.separators.get(prev))
                .map(|c| regex::escape(&c.to_string()))
                .unwrap_or_default();
            masked.push_str(&format!("{separator}[0-9]{{{group_len}}}"));
            if idx == 0 {
                partial.push_str(&format!("[0-9]{{0,{group_len}}}"));
            } else {
                partial.push_str(&format!("(?:{separator}[0-9]{{0,{group_len}}})?"));
            }
        }
        masked.push('$');
        partial.push('$');
        let raw = format!("^[0-9]{{{}}}$", self.length);
        [masked, raw, partial]
    }

    pub fn compile_format(&self) -> Result<RegexSet, regex::Error> {
        RegexSet::new(self.format_patterns())
    }

    fn wrong_length(&self, actual: usize) -> FormatError {
        FormatError::WrongLength {
            kind: self.kind,
            expected: self.length,
            actual,
        }
    }
}
