use crate::utils::{accept, check_not_repeated, Rejection};
use crate::validation::extract_digits;

const CEP_LENGTH: usize = 8;

/// CEP (postal code). Only the digits count, so `12345-678` and `12345678`
/// are the same code.
pub struct CepValidator;

impl CepValidator {
    pub fn validate(cep: &str) -> bool {
        accept("CEP", Self::check(cep))
    }

    pub(crate) fn check(cep: &str) -> Result<(), Rejection> {
        let digits = extract_digits(cep);
        if digits.len() != CEP_LENGTH {
            return Err(Rejection::DigitCount {
                expected: CEP_LENGTH,
                found: digits.len(),
            });
        }
        check_not_repeated(&digits)
    }
}
