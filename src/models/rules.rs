use log::debug;
use serde::Deserialize;
use std::path::Path;

use crate::models::{DateFormat, FieldKind};
use crate::utils::CadastroError;

/// Settings for validating a whole [`crate::models::ContactRecord`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecordRules {
    pub required: Vec<FieldKind>,
    pub birth_date_format: DateFormat,
    pub min_age: u32,
}

impl RecordRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(mut self, field: FieldKind) -> Self {
        if !self.required.contains(&field) {
            self.required.push(field);
        }
        self
    }

    pub fn with_birth_date(mut self, format: DateFormat, min_age: u32) -> Self {
        self.birth_date_format = format;
        self.min_age = min_age;
        self
    }

    pub fn is_required(&self, field: FieldKind) -> bool {
        self.required.contains(&field)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CadastroError> {
        let rules: RecordRules = serde_json::from_str(json)?;
        debug!(
            "Loaded record rules: {} required field(s), birth date {} with minimum age {}",
            rules.required.len(),
            rules.birth_date_format,
            rules.min_age
        );
        Ok(rules)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CadastroError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
