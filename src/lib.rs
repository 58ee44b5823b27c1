//! Validation predicates for personal and contact data: e-mail addresses,
//! CPF and CNPJ tax numbers, dates and birth dates, full names, URLs, hosts
//! and CEP postal codes.
//!
//! Every predicate is a pure function returning `bool`; malformed input is
//! simply `false`.

pub mod models;
pub mod record_validator;
pub mod utils;
pub mod validation;

pub use models::DateFormat;
pub use record_validator::RecordValidator;

use validation::*;

pub fn validate_email(email: &str) -> bool {
    EmailValidator::validate(email)
}

pub fn validate_cpf(cpf: &str) -> bool {
    CpfValidator::validate(cpf)
}

pub fn validate_cnpj(cnpj: &str) -> bool {
    CnpjValidator::validate(cnpj)
}

/// Use `DateFormat::default()` (`YYYY-MM-DD`) when no particular format is
/// expected.
pub fn validate_date(date: &str, format: DateFormat) -> bool {
    DateValidator::validate(date, format)
}

/// `min_age` of 0 accepts any valid date that is not in the future.
pub fn validate_birth_date(date: &str, min_age: u32, format: DateFormat) -> bool {
    BirthDateValidator::validate(date, min_age, format)
}

pub fn validate_full_name(full_name: &str) -> bool {
    FullNameValidator::validate(full_name)
}

pub fn validate_url(url: &str) -> bool {
    UrlValidator::validate(url)
}

pub fn is_valid_host(host: &str) -> bool {
    HostValidator::is_valid_host(host)
}

pub fn validate_cep(cep: &str) -> bool {
    CepValidator::validate(cep)
}
