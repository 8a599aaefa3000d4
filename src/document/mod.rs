pub mod cnpj;
pub mod cpf;
mod parsed;
pub mod scheme;

pub use crate::document::parsed::Document;
pub use crate::document::scheme::{calculate_digit, CheckDigitScheme};

use crate::error::{FormatError, InvalidDocument};
use crate::validation::Validator;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[serde(tag = "type")]
pub enum DocumentKind {
    #[strum(serialize = "CPF")]
    Cpf,
    #[strum(serialize = "CNPJ")]
    Cnpj,
}

impl DocumentKind {
    pub fn scheme(&self) -> &'static CheckDigitScheme {
        match self {
            DocumentKind::Cpf => &cpf::CPF,
            DocumentKind::Cnpj => &cnpj::CNPJ,
        }
    }

    /// Lowercase name used as a metric label
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Cpf => "cpf",
            DocumentKind::Cnpj => "cnpj",
        }
    }

    pub fn validate(&self, input: &str) -> bool {
        self.scheme().validate(input)
    }

    pub fn check(&self, input: &str) -> Result<String, InvalidDocument> {
        self.scheme().check(input)
    }

    pub fn mask(&self, input: &str) -> Result<String, FormatError> {
        self.scheme().mask(input)
    }

    pub fn unmask(&self, input: &str) -> String {
        self.scheme().unmask(input)
    }

    pub fn generate(&self) -> String {
        self.scheme().generate()
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.scheme().generate_with(rng)
    }

    pub fn is_valid_format(&self, input: &str) -> bool {
        match self {
            DocumentKind::Cpf => cpf::is_valid_format(input),
            DocumentKind::Cnpj => cnpj::is_valid_format(input),
        }
    }
}

impl Validator for DocumentKind {
    fn is_valid(&self, input: &str) -> bool {
        self.validate(input)
    }
}
