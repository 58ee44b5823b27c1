use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::utils::CadastroError;

/// Positional pattern used to read a date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "YYYY-MM-DD")]
    YearMonthDay, // 2020-02-29
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear, // 29/02/2020
    #[serde(rename = "MM-DD-YYYY")]
    MonthDayYear, // 02-29-2020
}

impl DateFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::YearMonthDay => "YYYY-MM-DD",
            DateFormat::DayMonthYear => "DD/MM/YYYY",
            DateFormat::MonthDayYear => "MM-DD-YYYY",
        }
    }

    pub fn separator(&self) -> char {
        match self {
            DateFormat::YearMonthDay | DateFormat::MonthDayYear => '-',
            DateFormat::DayMonthYear => '/',
        }
    }

    /// Reorders split components into `(year, month, day)`.
    pub fn arrange<T: Copy>(&self, parts: [T; 3]) -> (T, T, T) {
        let [a, b, c] = parts;
        match self {
            DateFormat::YearMonthDay => (a, b, c),
            DateFormat::DayMonthYear => (c, b, a),
            DateFormat::MonthDayYear => (c, a, b),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

impl FromStr for DateFormat {
    type Err = CadastroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "YYYY-MM-DD" => Ok(DateFormat::YearMonthDay),
            "DD/MM/YYYY" => Ok(DateFormat::DayMonthYear),
            "MM-DD-YYYY" => Ok(DateFormat::MonthDayYear),
            other => Err(CadastroError::UnknownDateFormat(other.to_string())),
        }
    }
}

/// A syntactically valid host as accepted in URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Host {
    Localhost,
    Ipv4([u8; 4]),
    Domain(Vec<String>), // labels, left to right
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Host::Localhost => f.write_str("localhost"),
            Host::Ipv4([a, b, c, d]) => write!(f, "{}.{}.{}.{}", a, b, c, d),
            Host::Domain(labels) => f.write_str(&labels.join(".")),
        }
    }
}

/// Personal/contact data submitted for validation. Every field is optional;
/// which ones must be present is decided by [`crate::models::RecordRules`].
/// A missing field and an empty string are both treated as absent, while a
/// whitespace-only value is validated like any other.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub cnpj: Option<String>,
    pub birth_date: Option<String>,
    pub cep: Option<String>,
    pub website: Option<String>,
}

impl ContactRecord {
    pub fn from_json_str(json: &str) -> Result<Self, CadastroError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CadastroError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

/// Field of a [`ContactRecord`], also the `KIND` accepted by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    FullName,
    Email,
    Cpf,
    Cnpj,
    BirthDate,
    Cep,
    Website,
}

impl FieldKind {
    pub const ALL: [FieldKind; 7] = [
        FieldKind::FullName,
        FieldKind::Email,
        FieldKind::Cpf,
        FieldKind::Cnpj,
        FieldKind::BirthDate,
        FieldKind::Cep,
        FieldKind::Website,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::FullName => "Full name",
            FieldKind::Email => "E-mail",
            FieldKind::Cpf => "CPF",
            FieldKind::Cnpj => "CNPJ",
            FieldKind::BirthDate => "Birth date",
            FieldKind::Cep => "CEP",
            FieldKind::Website => "Website",
        }
    }

    pub fn value<'a>(&self, record: &'a ContactRecord) -> Option<&'a str> {
        let field = match self {
            FieldKind::FullName => &record.full_name,
            FieldKind::Email => &record.email,
            FieldKind::Cpf => &record.cpf,
            FieldKind::Cnpj => &record.cnpj,
            FieldKind::BirthDate => &record.birth_date,
            FieldKind::Cep => &record.cep,
            FieldKind::Website => &record.website,
        };
        field.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub issue_type: ValidationIssueType,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssueType {
    Missing,
    Format,
    Checksum,
    Age,
}

/// Outcome for one field of a record. `valid` is `None` when the field was
/// absent and therefore not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldResult {
    pub field: FieldKind,
    pub valid: Option<bool>,
}

#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub fields: Vec<FieldResult>,
    pub issues: Vec<ValidationIssue>,
}
