//! Validation of a sign-up style form made of an e-mail, a password and a CNPJ.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::cnpj;
use crate::email::{extract_domain, is_from_domain, normalize_email, validate_email};
use crate::password::validate_password;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FormInput {
    pub email: String,
    pub password: String,
    pub cnpj: String,
}

impl FormInput {
    pub fn new(email: &str, password: &str, cnpj: &str) -> Self {
        Self {
            email: email.to_owned(),
            password: password.to_owned(),
            cnpj: cnpj.to_owned(),
        }
    }
}

/// Per-field outcome of [validate_form]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormValidation {
    pub email: bool,
    pub password: bool,
    pub cnpj: bool,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.email && self.password && self.cnpj
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProcessedForm {
    pub normalized_email: String,
    pub domain: String,
    pub is_from_trusted_domain: bool,
    pub masked_cnpj: String,
    pub unmasked_cnpj: String,
    pub cnpj_format_valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("invalid form: {0:?}")]
    Invalid(FormValidation),
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

pub fn validate_form(input: &FormInput) -> FormValidation {
    FormValidation {
        email: validate_email(&input.email),
        password: validate_password(&input.password),
        cnpj: cnpj::validate(&input.cnpj),
    }
}

/// Validates the form and derives the canonical representations of its fields.
pub fn process_form(input: &FormInput, trusted_domain: &str) -> Result<ProcessedForm, FormError> {
    let validation = validate_form(input);
    if !validation.is_valid() {
        tracing::debug!(
            email = validation.email,
            password = validation.password,
            cnpj = validation.cnpj,
            "invalid form"
        );
        return Err(FormError::Invalid(validation));
    }

    let invalid = || FormError::Invalid(validation);
    let normalized_email = normalize_email(&input.email);
    let domain = extract_domain(&input.email).ok_or_else(invalid)?.to_owned();
    let masked_cnpj = cnpj::mask(&input.cnpj).map_err(|_| invalid())?;

    Ok(ProcessedForm {
        normalized_email,
        domain,
        is_from_trusted_domain: is_from_domain(&input.email, trusted_domain),
        unmasked_cnpj: cnpj::unmask(&masked_cnpj),
        cnpj_format_valid: cnpj::is_valid_format(&masked_cnpj),
        masked_cnpj,
    })
}

pub fn summarize(inputs: &[FormInput]) -> BatchSummary {
    let valid = inputs
        .iter()
        .filter(|input| validate_form(input).is_valid())
        .count();
    BatchSummary {
        total: inputs.len(),
        valid,
        invalid: inputs.len() - valid,
    }
}
