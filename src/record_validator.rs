use log::info;

use crate::models::*;
use crate::validation::*;

/// Runs every field validator over a [`ContactRecord`] according to a set of
/// [`RecordRules`].
pub struct RecordValidator {
    rules: RecordRules,
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new(RecordRules::default())
    }
}

impl RecordValidator {
    pub fn new(rules: RecordRules) -> Self {
        RecordValidator { rules }
    }

    pub fn rules(&self) -> &RecordRules {
        &self.rules
    }

    pub fn validate(&self, record: &ContactRecord) -> ValidationResult {
        let mut fields = Vec::with_capacity(FieldKind::ALL.len());
        let mut issues = Vec::new();

        for field in FieldKind::ALL {
            // Only an empty string counts as absent; blanks are checked and fail.
            let value = field.value(record).filter(|v| !v.is_empty());

            let valid = match value {
                Some(value) => {
                    let valid = self.validate_field(field, value);
                    if !valid {
                        issues.push(self.issue_for(field));
                    }
                    Some(valid)
                }
                None => {
                    if self.rules.is_required(field) {
                        issues.push(ValidationIssue {
                            issue_type: ValidationIssueType::Missing,
                            message: format!("{} is required", field.label()),
                        });
                    }
                    None
                }
            };

            fields.push(FieldResult { field, valid });
        }

        let is_valid = issues.is_empty();
        info!(
            "Record validated: {} ({} field(s) checked, {} issue(s))",
            if is_valid { "VALID" } else { "INVALID" },
            fields.iter().filter(|f| f.valid.is_some()).count(),
            issues.len()
        );

        ValidationResult {
            is_valid,
            fields,
            issues,
        }
    }

    fn validate_field(&self, field: FieldKind, value: &str) -> bool {
        match field {
            FieldKind::FullName => FullNameValidator::validate(value),
            FieldKind::Email => EmailValidator::validate(value),
            FieldKind::Cpf => CpfValidator::validate(value),
            FieldKind::Cnpj => CnpjValidator::validate(value),
            FieldKind::BirthDate => BirthDateValidator::validate(
                value,
                self.rules.min_age,
                self.rules.birth_date_format,
            ),
            FieldKind::Cep => CepValidator::validate(value),
            FieldKind::Website => UrlValidator::validate(value),
        }
    }

    fn issue_for(&self, field: FieldKind) -> ValidationIssue {
        let (issue_type, message) = match field {
            FieldKind::Cpf | FieldKind::Cnpj => (
                ValidationIssueType::Checksum,
                format!("{} is malformed or has wrong check digits", field.label()),
            ),
            FieldKind::BirthDate if self.rules.min_age > 0 => (
                ValidationIssueType::Age,
                format!(
                    "Birth date is not a valid {} date or is under {} years",
                    self.rules.birth_date_format, self.rules.min_age
                ),
            ),
            FieldKind::BirthDate => (
                ValidationIssueType::Format,
                format!(
                    "Birth date is not a valid {} date",
                    self.rules.birth_date_format
                ),
            ),
            _ => (
                ValidationIssueType::Format,
                format!("{} is not valid", field.label()),
            ),
        };
        ValidationIssue {
            issue_type,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> ContactRecord {
        ContactRecord {
            full_name: Some("Maria da Silva".to_string()),
            email: Some("maria@example.com.br".to_string()),
            cpf: Some("529.982.247-25".to_string()),
            cnpj: Some("11.222.333/0001-81".to_string()),
            birth_date: Some("1990-05-20".to_string()),
            cep: Some("01310-100".to_string()),
            website: Some("https://example.com.br/contato".to_string()),
        }
    }

    #[test]
    fn test_valid_record() {
        let validator = RecordValidator::new(RecordRules::new().with_birth_date(DateFormat::YearMonthDay, 18));
        let result = validator.validate(&complete_record());
        assert!(result.is_valid, "issues: {:?}", result.issues);
        assert_eq!(result.fields.len(), 7);
        assert!(result.fields.iter().all(|f| f.valid == Some(true)));
    }

    #[test]
    fn test_invalid_fields_raise_issues() {
        let mut record = complete_record();
        record.cpf = Some("123.456.789-08".to_string());
        record.email = Some("maria@example".to_string());

        let result = RecordValidator::default().validate(&record);
        assert!(!result.is_valid);
        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.issues[0].issue_type, ValidationIssueType::Format);
        assert_eq!(result.issues[1].issue_type, ValidationIssueType::Checksum);
        assert_eq!(
            result.fields[2],
            FieldResult {
                field: FieldKind::Cpf,
                valid: Some(false)
            }
        );
    }

    #[test]
    fn test_missing_required_fields() {
        let rules = RecordRules::new()
            .require(FieldKind::FullName)
            .require(FieldKind::Cpf);
        let record = ContactRecord {
            full_name: Some(String::new()),
            ..ContactRecord::default()
        };

        let result = RecordValidator::new(rules).validate(&record);
        assert!(!result.is_valid);
        assert_eq!(result.issues.len(), 2);
        assert!(result
            .issues
            .iter()
            .all(|i| i.issue_type == ValidationIssueType::Missing));
        assert!(result.fields.iter().all(|f| f.valid.is_none()));
    }

    #[test]
    fn test_blank_values_are_validated() {
        let record = ContactRecord {
            email: Some("   ".to_string()),
            full_name: Some("\t".to_string()),
            ..ContactRecord::default()
        };

        let result = RecordValidator::default().validate(&record);
        assert!(!result.is_valid);
        assert_eq!(result.issues.len(), 2);
        assert!(result
            .issues
            .iter()
            .all(|i| i.issue_type == ValidationIssueType::Format));
        assert_eq!(result.fields[0].valid, Some(false));
        assert_eq!(result.fields[1].valid, Some(false));
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let record = ContactRecord {
            email: Some("someone@example.com".to_string()),
            ..ContactRecord::default()
        };
        let result = RecordValidator::default().validate(&record);
        assert!(result.is_valid);
        assert_eq!(result.fields.iter().filter(|f| f.valid.is_some()).count(), 1);
    }

    #[test]
    fn test_birth_date_uses_rules() {
        let rules = RecordRules::new().with_birth_date(DateFormat::DayMonthYear, 150);
        let record = ContactRecord {
            birth_date: Some("20/05/1990".to_string()),
            ..ContactRecord::default()
        };
        let result = RecordValidator::new(rules).validate(&record);
        assert!(!result.is_valid);
        assert_eq!(result.issues[0].issue_type, ValidationIssueType::Age);
    }
}
