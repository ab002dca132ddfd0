//! Schema-based validation of raw form submissions.
//!
//! Admin and public forms arrive as string-keyed maps (HTML form encoding).
//! Each entity has a typed form record with a `parse` constructor that runs
//! every field through an explicit parser ([`fields`]) and either returns
//! the fully typed record or a [`ValidationErrors`] value enumerating
//! *every* violated field. Validation fails closed: a single bad field
//! aborts the whole operation.

pub mod fields;
pub mod schemas;

use std::collections::BTreeMap;

use serde::Serialize;

/// Raw form input as submitted: string keys, string values.
pub type FormInput = BTreeMap<String, String>;

/// A single violated field with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// The full set of field violations for one form submission.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a violation for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Finish parsing: return the record if no field was violated.
    pub fn finish<T>(self, record: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(record)
        } else {
            Err(self)
        }
    }

    /// True if `field` is among the violations.
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validation failed:")?;
        for err in &self.0 {
            write!(f, " {}: {};", err.field, err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
