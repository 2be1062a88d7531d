//! Authentication result types
//!
//! Defines the outcome of a single validation attempt.

use super::identities::Role;
use crate::error::{FieldError, LoginError};
use std::collections::BTreeMap;
use std::fmt;

/// Form field an inline error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Identifier,
    Secret,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Identifier => "identifier",
            Field::Secret => "secret",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to error mapping, at most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FieldErrors {
    /// Records `error` against the field it belongs to, replacing any
    /// previous error for that field.
    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field(), error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Human-readable message for `field`, if it has an error.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors ordered identifier first, then secret.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}

/// Result of validating one set of credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Credentials matched a known identity.
    Resolved(Role),
    /// One or more fields are structurally invalid. No lookup was made.
    Invalid(FieldErrors),
    /// Structurally valid but no known identity matched.
    Rejected(LoginError),
}

impl ValidationResult {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ValidationResult::Resolved(_))
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            ValidationResult::Resolved(role) => Some(*role),
            _ => None,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationResult::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn general_error(&self) -> Option<&LoginError> {
        match self {
            ValidationResult::Rejected(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_one_error_per_field() {
        let mut errors = FieldErrors::default();
        errors.insert(FieldError::IdentifierRequired);
        errors.insert(FieldError::IdentifierMalformed);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::Identifier),
            Some(&FieldError::IdentifierMalformed)
        );
    }

    #[test]
    fn iter_orders_identifier_before_secret() {
        let mut errors = FieldErrors::default();
        errors.insert(FieldError::SecretRequired);
        errors.insert(FieldError::IdentifierRequired);
        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::Identifier, Field::Secret]);
    }
}
