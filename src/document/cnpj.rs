//! Brazilian CNPJ (Cadastro Nacional da Pessoa Jurídica), the company taxpayer number.
// https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica

use lazy_static::lazy_static;
use rand::Rng;
use regex::RegexSet;

use crate::document::scheme::CheckDigitScheme;
use crate::document::DocumentKind;
use crate::error::{FormatError, InvalidDocument};

// XX.XXX.XXX/YYYY-ZZ
pub static CNPJ: CheckDigitScheme = CheckDigitScheme {
    kind: DocumentKind::Cnpj,
    length: 14,
    partial_length: 12,
    first_weights: &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    second_weights: &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    groups: &[2, 3, 3, 4, 2],
    separators: &['.', '.', '/', '-'],
};

lazy_static! {
    static ref CNPJ_FORMAT: RegexSet =
        CNPJ.compile_format().expect("CNPJ format patterns compile");
}

pub fn validate(cnpj: &str) -> bool {
    CNPJ.validate(cnpj)
}

pub fn check(cnpj: &str) -> Result<String, InvalidDocument> {
    CNPJ.check(cnpj)
}

pub fn mask(cnpj: &str) -> Result<String, FormatError> {
    CNPJ.mask(cnpj)
}

pub fn unmask(cnpj: &str) -> String {
    CNPJ.unmask(cnpj)
}

pub fn generate() -> String {
    CNPJ.generate()
}

pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    CNPJ.generate_with(rng)
}

pub fn is_valid_format(cnpj: &str) -> bool {
    CNPJ_FORMAT.is_match(cnpj)
}
