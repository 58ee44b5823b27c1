use crate::utils::{accept, check_not_repeated, Rejection};
use crate::validation::extract_digits;

const CNPJ_LENGTH: usize = 14;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ (company taxpayer number), e.g. `12.345.678/0001-95`.
pub struct CnpjValidator;

impl CnpjValidator {
    pub fn validate(cnpj: &str) -> bool {
        accept("CNPJ", Self::check(cnpj))
    }

    pub(crate) fn check(cnpj: &str) -> Result<(), Rejection> {
        if cnpj.is_empty() {
            return Err(Rejection::Empty);
        }

        let digits = extract_digits(cnpj);
        if digits.len() != CNPJ_LENGTH {
            return Err(Rejection::DigitCount {
                expected: CNPJ_LENGTH,
                found: digits.len(),
            });
        }
        check_not_repeated(&digits)?;

        for weights in [&FIRST_WEIGHTS[..], &SECOND_WEIGHTS[..]] {
            let position = weights.len();
            let expected = Self::check_digit(&digits[..position], weights);
            if digits[position] != expected {
                return Err(Rejection::CheckDigit {
                    position,
                    expected,
                    found: digits[position],
                });
            }
        }

        Ok(())
    }

    fn check_digit(base: &[u32], weights: &[u32]) -> u32 {
        let sum: u32 = base.iter().zip(weights).map(|(d, w)| d * w).sum();
        match sum % 11 {
            r if r < 2 => 0,
            r => 11 - r,
        }
    }
}
