//! Domain Errors
//!
//! Error types for domain operations.

use std::fmt::Display;

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with {key}")]
    NotFound { entity_type: String, key: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("XML error: {0}")]
    Xml(String),
}

impl DomainError {
    /// Entity absent for the given id
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: i64) -> Self {
        Self::not_found_by(entity_type, "id", id)
    }

    /// Entity absent for an arbitrary lookup key, e.g. `not_found_by("User", "email", email)`
    pub fn not_found_by<T: AsRef<str>, V: Display>(entity_type: T, field: &str, value: V) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            key: format!("{} {}", field, value),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
