//! Authentication validator
//!
//! Structural checks on submitted credentials followed by a lookup in the
//! injected identity table.

use super::credentials::Credentials;
use super::identities::IdentityTable;
use super::results::{FieldErrors, ValidationResult};
use crate::config::AppConfig;
use crate::error::{FieldError, LoginError};
use crate::utils::validation::{is_email_like, meets_min_length};
use log::{debug, warn};

pub const DEFAULT_MIN_SECRET_LENGTH: usize = 6;

/// Validates credentials against a fixed identity table.
///
/// Holds no mutable state: the same input always produces the same result,
/// and a validator can be shared between threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CredentialValidator {
    identities: IdentityTable,
    min_secret_length: usize,
}

impl Default for CredentialValidator {
    fn default() -> Self {
        Self::new(IdentityTable::default())
    }
}

impl CredentialValidator {
    pub fn new(identities: IdentityTable) -> Self {
        Self {
            identities,
            min_secret_length: DEFAULT_MIN_SECRET_LENGTH,
        }
    }

    pub fn with_min_secret_length(mut self, min_secret_length: usize) -> Self {
        self.min_secret_length = min_secret_length;
        self
    }

    /// Builds a validator from loaded configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        for identifier in config.identities.duplicate_identifiers() {
            warn!(
                "Identifier {} is declared more than once; earlier entries take priority",
                identifier
            );
        }

        Self::new(config.identities.clone()).with_min_secret_length(config.min_secret_length)
    }

    pub fn identities(&self) -> &IdentityTable {
        &self.identities
    }

    pub fn min_secret_length(&self) -> usize {
        self.min_secret_length
    }

    /// Validates one submission.
    ///
    /// Field checks run first and independently. The identity table is only
    /// consulted when every field is structurally valid.
    pub fn validate(&self, credentials: &Credentials) -> ValidationResult {
        let errors = self.check_fields(credentials);
        if !errors.is_empty() {
            debug!(
                "Login attempt for {:?} rejected with {} field error(s)",
                credentials.identifier,
                errors.len()
            );
            return ValidationResult::Invalid(errors);
        }

        match self
            .identities
            .resolve(&credentials.identifier, &credentials.secret)
        {
            Some(role) => {
                debug!("Resolved {} as {}", credentials.identifier, role);
                ValidationResult::Resolved(role)
            }
            None => {
                debug!("No known identity matches {}", credentials.identifier);
                ValidationResult::Rejected(LoginError::UnknownIdentity)
            }
        }
    }

    fn check_fields(&self, credentials: &Credentials) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if credentials.identifier.is_empty() {
            errors.insert(FieldError::IdentifierRequired);
        } else if !is_email_like(&credentials.identifier) {
            errors.insert(FieldError::IdentifierMalformed);
        }

        if credentials.secret.is_empty() {
            errors.insert(FieldError::SecretRequired);
        } else if !meets_min_length(&credentials.secret, self.min_secret_length) {
            errors.insert(FieldError::SecretTooShort {
                min: self.min_secret_length,
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::identities::{KnownIdentity, Role};
    use crate::auth::results::Field;

    fn validate(identifier: &str, secret: &str) -> ValidationResult {
        CredentialValidator::default().validate(&Credentials::new(identifier, secret))
    }

    #[test]
    fn debug_output_hides_stored_secrets() {
        let rendered = format!("{:?}", CredentialValidator::default());
        assert!(rendered.contains("admin@corteya.com"));
        assert!(!rendered.contains("admin123"));
        assert!(!rendered.contains("barbero123"));
    }

    #[test]
    fn empty_fields_are_required() {
        let result = validate("", "");
        let errors = result.field_errors().unwrap();
        assert_eq!(
            errors.get(Field::Identifier),
            Some(&FieldError::IdentifierRequired)
        );
        assert_eq!(errors.get(Field::Secret), Some(&FieldError::SecretRequired));
    }

    #[test]
    fn short_secret_reports_configured_minimum() {
        let validator = CredentialValidator::default().with_min_secret_length(10);
        let result = validator.validate(&Credentials::new("admin@corteya.com", "admin123"));
        let errors = result.field_errors().unwrap();
        assert_eq!(
            errors.message(Field::Secret).as_deref(),
            Some("secret must be at least 10 characters")
        );
        assert!(!errors.contains(Field::Identifier));
    }

    #[test]
    fn field_errors_skip_identity_lookup() {
        // A table entry that would match if lookup ran.
        let table = IdentityTable::new(vec![KnownIdentity::new(Role::Admin, "x", "y")]);
        let result = CredentialValidator::new(table).validate(&Credentials::new("x", "y"));
        assert!(result.field_errors().is_some());
    }

    #[test]
    fn substituted_table_is_used() {
        let table = IdentityTable::new(vec![KnownIdentity::new(
            Role::Business,
            "barber@shop.test",
            "tijeras99",
        )]);
        let validator = CredentialValidator::new(table);
        assert_eq!(
            validator.validate(&Credentials::new("barber@shop.test", "tijeras99")),
            ValidationResult::Resolved(Role::Business)
        );
        assert_eq!(
            validator.validate(&Credentials::new("admin@corteya.com", "admin123")),
            ValidationResult::Rejected(LoginError::UnknownIdentity)
        );
    }

    #[test]
    fn secret_length_counts_characters() {
        let validator = CredentialValidator::default();
        // Five characters, seven bytes.
        let result = validator.validate(&Credentials::new("ana@corteya.com", "ñandú"));
        let errors = result.field_errors().unwrap();
        assert_eq!(
            errors.get(Field::Secret),
            Some(&FieldError::SecretTooShort { min: 6 })
        );
    }
}
