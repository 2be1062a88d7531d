//! Module `state`
//!
//! Defines the `LoginForm` struct holding field values, displayed errors
//! and the state of the latest attempt.

use super::results::{AttemptState, SubmitOutcome};
use crate::auth::{
    CredentialValidator, Credentials, Field, FieldErrors, LoginSubmission, ValidationResult,
};
use crate::config::RouteConfig;
use log::info;

/// Represents the login screen's form.
///
/// Each call to [`LoginForm::submit`] is an independent attempt. Only the
/// typed values and the errors on display carry over between attempts.
#[derive(Debug, Default)]
pub struct LoginForm {
    identifier: String,
    secret: String,
    remember: bool,
    field_errors: FieldErrors,
    general_error: Option<String>,
    state: AttemptState,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one attempt against `validator` and records the outcome.
    pub fn submit(
        &mut self,
        validator: &CredentialValidator,
        routes: &RouteConfig,
    ) -> SubmitOutcome {
        self.field_errors.clear();
        self.general_error = None;
        self.state = AttemptState::Validating;

        let submission = self.submission();
        match validator.validate(&submission.credentials) {
            ValidationResult::Resolved(role) => {
                let destination = routes.destination_for(role).to_string();
                info!("Signed in as {}, continuing to {}", role, destination);
                self.state = AttemptState::Resolved(role);
                SubmitOutcome::Navigate {
                    role,
                    destination,
                    remember: submission.remember,
                }
            }
            ValidationResult::Invalid(errors) => {
                self.state = AttemptState::RejectedFields;
                self.field_errors = errors.clone();
                SubmitOutcome::ShowFieldErrors(errors)
            }
            ValidationResult::Rejected(error) => {
                let message = error.to_string();
                self.state = AttemptState::RejectedGeneral;
                self.general_error = Some(message.clone());
                SubmitOutcome::ShowGeneralError(message)
            }
        }
    }

    /// Clears values, errors and the remember flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn submission(&self) -> LoginSubmission {
        LoginSubmission::new(
            Credentials::new(self.identifier.clone(), self.secret.clone()),
            self.remember,
        )
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn remember(&self) -> bool {
        self.remember
    }

    /// Inline errors from the latest attempt, minus fields edited since.
    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn field_error(&self, field: Field) -> Option<String> {
        self.field_errors.message(field)
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    // --------------------
    // Setter methods
    // --------------------

    /// Replaces the identifier and clears its inline error.
    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
        self.field_errors.remove(Field::Identifier);
    }

    /// Replaces the secret and clears its inline error.
    pub fn set_secret(&mut self, secret: impl Into<String>) {
        self.secret = secret.into();
        self.field_errors.remove(Field::Secret);
    }

    pub fn set_remember(&mut self, remember: bool) {
        self.remember = remember;
    }

    pub fn toggle_remember(&mut self) {
        self.remember = !self.remember;
    }
}
