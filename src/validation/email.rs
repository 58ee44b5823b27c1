use crate::utils::{accept, check_printable, Rejection};

/// Purely syntactic e-mail address check. No DNS or mailbox lookups.
pub struct EmailValidator;

impl EmailValidator {
    pub fn validate(email: &str) -> bool {
        accept("E-mail", Self::check(email))
    }

    pub(crate) fn check(email: &str) -> Result<(), Rejection> {
        if email.contains(' ') {
            return Err(Rejection::ContainsSpace);
        }

        let parts: Vec<&str> = email.split('@').collect();
        let (local, domain) = match parts.as_slice() {
            [local, domain] => (*local, *domain),
            _ => return Err(Rejection::AtSign(parts.len())),
        };

        if local.is_empty() {
            return Err(Rejection::LocalPart("empty"));
        }
        if local.starts_with('.') || local.ends_with('.') {
            return Err(Rejection::LocalPart("starts or ends with '.'"));
        }
        if local.contains("..") {
            return Err(Rejection::LocalPart("consecutive dots"));
        }

        if domain.is_empty() {
            return Err(Rejection::Domain("empty"));
        }
        if !domain.contains('.') {
            return Err(Rejection::Domain("no '.'"));
        }
        if domain.starts_with('.') || domain.ends_with('.') {
            return Err(Rejection::Domain("starts or ends with '.'"));
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.iter().any(|label| label.is_empty()) {
            return Err(Rejection::Domain("empty label"));
        }

        // `labels` has at least two entries since the domain contains a dot
        if let Some(tld) = labels.last() {
            if tld.chars().count() < 2 {
                return Err(Rejection::TopLevelDomain(tld.to_string()));
            }
        }

        check_printable(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(EmailValidator::validate("test@example.com"));
        assert!(EmailValidator::validate("invalid@abc1111.com"));
        assert!(EmailValidator::validate("first.last+tag@mail.example.com.br"));
    }

    #[test]
    fn test_structure() {
        assert_eq!(EmailValidator::check("invalid-email"), Err(Rejection::AtSign(1)));
        assert_eq!(EmailValidator::check(""), Err(Rejection::AtSign(1)));
        assert_eq!(EmailValidator::check("a@b@c.com"), Err(Rejection::AtSign(3)));
        assert!(!EmailValidator::validate("@example.com"));
        assert!(!EmailValidator::validate("user@"));
    }

    #[test]
    fn test_local_part_dots() {
        assert!(!EmailValidator::validate(".user@example.com"));
        assert!(!EmailValidator::validate("user.@example.com"));
        assert!(!EmailValidator::validate("us..er@example.com"));
    }

    #[test]
    fn test_domain_rules() {
        assert!(!EmailValidator::validate("user@localhost"));
        assert!(!EmailValidator::validate("user@.example.com"));
        assert!(!EmailValidator::validate("user@example.com."));
        assert!(!EmailValidator::validate("user@example..com"));
        assert_eq!(
            EmailValidator::check("user@example.c"),
            Err(Rejection::TopLevelDomain("c".to_string()))
        );
    }

    #[test]
    fn test_spaces_and_control_characters() {
        assert_eq!(EmailValidator::check("us er@example.com"), Err(Rejection::ContainsSpace));
        assert!(!EmailValidator::validate(" user@example.com"));
        assert!(!EmailValidator::validate("us\ter@example.com"));
        assert!(!EmailValidator::validate("usér@example.com"));
    }
}
