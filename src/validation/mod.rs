pub mod birth_date;
pub mod cep;
pub mod cnpj;
pub mod cpf;
pub mod date;
pub mod email;
pub mod host;
pub mod name;
pub mod url;

pub use birth_date::BirthDateValidator;
pub use cep::CepValidator;
pub use cnpj::CnpjValidator;
pub use cpf::CpfValidator;
pub use date::DateValidator;
pub use email::EmailValidator;
pub use host::HostValidator;
pub use name::FullNameValidator;
pub use url::UrlValidator;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII only; `\D` in `regex` is Unicode-aware.
    static ref NON_DIGIT: Regex = Regex::new(r"[^0-9]").unwrap();
}

/// Drops every character that is not an ASCII digit and returns the digit
/// values in order.
pub(crate) fn extract_digits(value: &str) -> Vec<u32> {
    NON_DIGIT
        .replace_all(value, "")
        .bytes()
        .map(|b| u32::from(b - b'0'))
        .collect()
}
