use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::record_validation;
use crate::validation::Validator;

/// Substrings rejected when `prevent_sequential` is set, compared case-insensitively.
pub const SEQUENTIAL_PATTERNS: &[&str] = &["123", "abc", "qwe", "asd", "zxc"];

/// Characters accepted as symbols by `require_symbols`.
pub const SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Runs of this many identical characters are rejected when `prevent_repeating` is set.
const MAX_REPEATED_RUN: usize = 3;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PasswordRules {
    pub min_length: usize,
    /// `None` disables the upper bound
    pub max_length: Option<usize>,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_numbers: bool,
    pub require_symbols: bool,
    pub prevent_sequential: bool,
    pub prevent_repeating: bool,
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: Some(128),
            require_uppercase: true,
            require_lowercase: true,
            require_numbers: true,
            require_symbols: true,
            prevent_sequential: true,
            prevent_repeating: true,
        }
    }
}

impl PasswordRules {
    pub fn min_length(&self, min_length: usize) -> Self {
        self.mutate_clone(|x| x.min_length = min_length)
    }

    pub fn max_length(&self, max_length: Option<usize>) -> Self {
        self.mutate_clone(|x| x.max_length = max_length)
    }

    pub fn require_uppercase(&self, value: bool) -> Self {
        self.mutate_clone(|x| x.require_uppercase = value)
    }

    pub fn require_lowercase(&self, value: bool) -> Self {
        self.mutate_clone(|x| x.require_lowercase = value)
    }

    pub fn require_numbers(&self, value: bool) -> Self {
        self.mutate_clone(|x| x.require_numbers = value)
    }

    pub fn require_symbols(&self, value: bool) -> Self {
        self.mutate_clone(|x| x.require_symbols = value)
    }

    pub fn prevent_sequential(&self, value: bool) -> Self {
        self.mutate_clone(|x| x.prevent_sequential = value)
    }

    pub fn prevent_repeating(&self, value: bool) -> Self {
        self.mutate_clone(|x| x.prevent_repeating = value)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordViolation {
    #[error("Password must have at least {0} characters")]
    TooShort(usize),

    #[error("Password must have at most {0} characters")]
    TooLong(usize),

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must contain at least one number")]
    MissingNumber,

    #[error("Password must contain at least one special character")]
    MissingSymbol,

    #[error("Password must not contain common sequences (found \"{0}\")")]
    SequentialPattern(&'static str),

    #[error("Password must not repeat the same character 3 or more times in a row")]
    RepeatedCharacters,
}

/// Every rule the password breaks, in order: length, character classes, then patterns.
pub fn check_password(password: &str, rules: &PasswordRules) -> Vec<PasswordViolation> {
    let mut violations = vec![];
    check_length(password, rules, &mut violations);
    check_character_classes(password, rules, &mut violations);
    check_patterns(password, rules, &mut violations);
    violations
}

fn check_length(password: &str, rules: &PasswordRules, violations: &mut Vec<PasswordViolation>) {
    let length = password.chars().count();
    if length < rules.min_length {
        violations.push(PasswordViolation::TooShort(rules.min_length));
    }
    if let Some(max_length) = rules.max_length {
        if length > max_length {
            violations.push(PasswordViolation::TooLong(max_length));
        }
    }
}

fn check_character_classes(
    password: &str,
    rules: &PasswordRules,
    violations: &mut Vec<PasswordViolation>,
) {
    let classes: [(bool, fn(char) -> bool, PasswordViolation); 4] = [
        (
            rules.require_uppercase,
            |c| c.is_ascii_uppercase(),
            PasswordViolation::MissingUppercase,
        ),
        (
            rules.require_lowercase,
            |c| c.is_ascii_lowercase(),
            PasswordViolation::MissingLowercase,
        ),
        (
            rules.require_numbers,
            |c| c.is_ascii_digit(),
            PasswordViolation::MissingNumber,
        ),
        (
            rules.require_symbols,
            |c| SYMBOLS.contains(c),
            PasswordViolation::MissingSymbol,
        ),
    ];

    for (required, matches, violation) in classes {
        if required && !password.chars().any(matches) {
            violations.push(violation);
        }
    }
}

fn check_patterns(password: &str, rules: &PasswordRules, violations: &mut Vec<PasswordViolation>) {
    if rules.prevent_sequential {
        let lowercase = password.to_lowercase();
        if let Some(pattern) = SEQUENTIAL_PATTERNS
            .iter()
            .find(|pattern| lowercase.contains(*pattern))
        {
            violations.push(PasswordViolation::SequentialPattern(*pattern));
        }
    }
    if rules.prevent_repeating && has_repeated_run(password) {
        violations.push(PasswordViolation::RepeatedCharacters);
    }
}

fn has_repeated_run(password: &str) -> bool {
    let mut previous = None;
    let mut run = 0;
    for c in password.chars() {
        // Line terminators never take part in a run
        if matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}') {
            previous = None;
            run = 0;
            continue;
        }
        if previous == Some(c) {
            run += 1;
        } else {
            previous = Some(c);
            run = 1;
        }
        if run >= MAX_REPEATED_RUN {
            return true;
        }
    }
    false
}

/// Checks the password against the default rules.
pub fn validate_password(password: &str) -> bool {
    validate_password_with(password, &PasswordRules::default())
}

pub fn validate_password_with(password: &str, rules: &PasswordRules) -> bool {
    let violations = check_password(password, rules);
    if !violations.is_empty() {
        // The password itself is never logged
        tracing::debug!(violations = violations.len(), "rejected password");
    }
    record_validation("password", violations.is_empty());
    violations.is_empty()
}

impl Validator for PasswordRules {
    fn is_valid(&self, input: &str) -> bool {
        validate_password_with(input, self)
    }
}
