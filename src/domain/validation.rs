// src/domain/validation.rs
//! Validation plumbing shared by entity and DTO validators.
//!
//! Field rules are declared with `#[derive(Validate)]` on the validated types.
//! Every rule runs, so a single field may contribute more than one failure;
//! the crate's report is folded into [`ValidationErrors`] here.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use validator::{Validate, ValidationError};

/// Lowercase letters, digits and underscores only.
pub static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_]+$").expect("slug pattern is a valid regex"));

/// Key under which struct-level (schema) failures are reported.
const STRUCT_LEVEL_KEY: &str = "__all__";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every rule violation found in one validation pass, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    failures: Vec<ValidationFailure>,
}

impl ValidationErrors {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            failures: vec![ValidationFailure::new(field, message)],
        }
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.failures.iter().any(|failure| failure.field == field)
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|failure| failure.message.as_str())
    }

    pub fn contains_message(&self, needle: &str) -> bool {
        self.messages().any(|message| message.contains(needle))
    }
}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(report: validator::ValidationErrors) -> Self {
        let mut failures = Vec::new();
        for (field, errors) in report.field_errors() {
            let field = field.to_string();
            for error in errors {
                // Struct-level rules name the field they guard in their code.
                let name = if field == STRUCT_LEVEL_KEY {
                    error.code.to_string()
                } else {
                    field.clone()
                };
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                failures.push(ValidationFailure::new(name, message));
            }
        }
        failures.sort_by(|a, b| a.field.cmp(&b.field));
        Self { failures }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for message in self.messages() {
            if !first {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A stateless rule set for `T`. Implementors are unit structs so a single
/// instance can be shared freely.
pub trait Validator<T: ?Sized>: Send + Sync {
    fn validate(&self, target: &T) -> Result<(), ValidationErrors>;
}

/// Runs the derived rules of `target` and folds the report.
pub fn check<T: Validate>(target: &T) -> Result<(), ValidationErrors> {
    target.validate().map_err(ValidationErrors::from)
}

/// Rejects empty and whitespace-only text. The message comes from the
/// field's attribute.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// A struct-level failure reported against `field`.
pub fn struct_failure(field: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(field).with_message(Cow::Borrowed(message))
}
