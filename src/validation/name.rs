use crate::utils::{accept, is_blank, Rejection};

const MIN_PARTS: usize = 2;
const MIN_PART_LENGTH: usize = 2;

/// At least two whitespace-separated names, each two characters or longer.
/// Length is measured in UTF-16 code units, so a single astral character
/// (e.g. an emoji) already counts as two.
pub struct FullNameValidator;

impl FullNameValidator {
    pub fn validate(full_name: &str) -> bool {
        accept("Full name", Self::check(full_name))
    }

    pub(crate) fn check(full_name: &str) -> Result<(), Rejection> {
        if full_name.is_empty() {
            return Err(Rejection::Empty);
        }

        let parts: Vec<&str> = full_name
            .split(is_blank)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() < MIN_PARTS {
            return Err(Rejection::NameParts(parts.len()));
        }
        match parts
            .iter()
            .find(|p| p.encode_utf16().count() < MIN_PART_LENGTH)
        {
            Some(short) => Err(Rejection::NamePartTooShort(short.to_string())),
            None => Ok(()),
        }
    }
}
