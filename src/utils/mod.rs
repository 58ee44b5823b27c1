pub mod error;

pub use error::{CadastroError, Rejection};

use log::debug;

/// Collapses a validator's check into the boolean contract, logging the
/// reason for a rejection.
pub(crate) fn accept<T>(kind: &str, outcome: Result<T, Rejection>) -> bool {
    match outcome {
        Ok(_) => true,
        Err(reason) => {
            debug!("{} rejected: {}", kind, reason);
            false
        }
    }
}

/// Blank characters for trimming and splitting free text: Unicode
/// whitespace except NEL (U+0085), plus the byte-order mark (U+FEFF).
pub(crate) fn is_blank(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// True when every character of `value` is printable ASCII (33..=126).
pub(crate) fn check_printable(value: &str) -> Result<(), Rejection> {
    match value.chars().find(|c| !('!'..='~').contains(c)) {
        Some(c) => Err(Rejection::NonPrintable(c)),
        None => Ok(()),
    }
}

/// Rejects digit strings made of one repeated digit.
pub(crate) fn check_not_repeated(digits: &[u32]) -> Result<(), Rejection> {
    match digits.split_first() {
        Some((first, rest)) if rest.iter().all(|d| d == first) => Err(Rejection::RepeatedDigits),
        _ => Ok(()),
    }
}
