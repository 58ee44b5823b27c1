use crate::utils::{accept, check_not_repeated, Rejection};
use crate::validation::extract_digits;

const CPF_LENGTH: usize = 11;

/// CPF (individual taxpayer number): 9 base digits followed by two mod-11
/// check digits, usually written as `123.456.789-09`.
pub struct CpfValidator;

impl CpfValidator {
    pub fn validate(cpf: &str) -> bool {
        accept("CPF", Self::check(cpf))
    }

    pub(crate) fn check(cpf: &str) -> Result<(), Rejection> {
        if cpf.is_empty() {
            return Err(Rejection::Empty);
        }

        let digits = extract_digits(cpf);
        if digits.len() != CPF_LENGTH {
            return Err(Rejection::DigitCount {
                expected: CPF_LENGTH,
                found: digits.len(),
            });
        }
        check_not_repeated(&digits)?;

        for position in [9, 10] {
            let expected = Self::check_digit(&digits[..position]);
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

    /// Weights run from `len + 1` down to 2; a result of 10 maps to 0.
    fn check_digit(base: &[u32]) -> u32 {
        let sum: u32 = base
            .iter()
            .zip((2..=base.len() as u32 + 1).rev())
            .map(|(digit, weight)| digit * weight)
            .sum();

        match (sum * 10) % 11 {
            10 => 0,
            d => d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cpf() {
        assert!(CpfValidator::validate("123.456.789-09"));
        assert!(CpfValidator::validate("12345678909"));
        assert!(CpfValidator::validate("529.982.247-25"));
    }

    #[test]
    fn test_check_digits() {
        assert_eq!(CpfValidator::check_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), 0);
        assert_eq!(CpfValidator::check_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0]), 9);
        assert!(!CpfValidator::validate("121.121.121-12"));
        assert_eq!(
            CpfValidator::check("123.456.789-08"),
            Err(Rejection::CheckDigit {
                position: 10,
                expected: 9,
                found: 8
            })
        );
    }

    #[test]
    fn test_repeated_digits() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(11);
            assert_eq!(CpfValidator::check(&cpf), Err(Rejection::RepeatedDigits));
        }
        assert!(!CpfValidator::validate("111.111.111-11"));
    }

    #[test]
    fn test_length_and_empty() {
        assert_eq!(
            CpfValidator::check("123.456.789-0"),
            Err(Rejection::DigitCount {
                expected: 11,
                found: 10
            })
        );
        assert!(!CpfValidator::validate("123.456.789-091"));
        assert_eq!(CpfValidator::check(""), Err(Rejection::Empty));
        assert!(!CpfValidator::validate("abc.def.ghi-jk"));
    }
}
