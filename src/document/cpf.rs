//! Brazilian CPF (Cadastro de Pessoas Físicas), the individual taxpayer number.
//!
//! Eleven digits, masked as `###.###.###-##`. The last two are verifier digits.
// https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador

use lazy_static::lazy_static;
use rand::Rng;
use regex::RegexSet;

use crate::document::scheme::CheckDigitScheme;
use crate::document::DocumentKind;
use crate::error::{FormatError, InvalidDocument};

pub static CPF: CheckDigitScheme = CheckDigitScheme {
    kind: DocumentKind::Cpf,
    length: 11,
    partial_length: 9,
    first_weights: &[10, 9, 8, 7, 6, 5, 4, 3, 2],
    second_weights: &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2],
    groups: &[3, 3, 3, 2],
    separators: &['.', '.', '-'],
};

lazy_static! {
    static ref CPF_FORMAT: RegexSet =
        CPF.compile_format().expect("CPF format patterns compile");
}

pub fn validate(cpf: &str) -> bool {
    CPF.validate(cpf)
}

pub fn check(cpf: &str) -> Result<String, InvalidDocument> {
    CPF.check(cpf)
}

pub fn mask(cpf: &str) -> Result<String, FormatError> {
    CPF.mask(cpf)
}

pub fn unmask(cpf: &str) -> String {
    CPF.unmask(cpf)
}

pub fn generate() -> String {
    CPF.generate()
}

pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    CPF.generate_with(rng)
}

/// Shape check for complete (masked or raw) and partially typed CPFs. The checksum is
/// not verified.
pub fn is_valid_format(cpf: &str) -> bool {
    CPF_FORMAT.is_match(cpf)
}
