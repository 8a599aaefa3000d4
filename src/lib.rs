// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod digits;
mod document;
mod email;
mod error;
mod form;
mod observability;
mod password;
mod validation;

// This is the public API of the brdocs library
pub use digits::clean;
pub use document::{
    calculate_digit, cnpj, cpf, scheme::VERIFIER_DIGIT_COUNT, CheckDigitScheme, Document,
    DocumentKind,
};
pub use email::{
    extract_domain, extract_local_part, is_from_domain, normalize_email, validate_email,
    EmailChecker, MAX_DOMAIN_LENGTH, MAX_LOCAL_PART_LENGTH,
};
pub use error::{FormatError, InvalidDocument};
pub use form::{
    process_form, summarize, validate_form, BatchSummary, FormError, FormInput, FormValidation,
    ProcessedForm,
};
pub use observability::{Labels, GENERATED_METRIC, MASK_ERROR_METRIC, VALIDATION_METRIC};
pub use password::{
    check_password, validate_password, validate_password_with, PasswordRules, PasswordViolation,
    SEQUENTIAL_PATTERNS, SYMBOLS,
};
pub use validation::{count_failures, Validator};
