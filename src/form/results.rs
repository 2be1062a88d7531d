//! Form result types
//!
//! Defines what a submission tells the caller to do next.

use crate::auth::{FieldErrors, Role};

/// Where the current attempt stands.
///
/// `Validating` only exists for the duration of [`LoginForm::submit`];
/// callers always observe one of the other states.
///
/// [`LoginForm::submit`]: super::LoginForm::submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttemptState {
    #[default]
    Idle,
    Validating,
    Resolved(Role),
    RejectedFields,
    RejectedGeneral,
}

/// Result of a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Signed in; continue to the role's destination.
    Navigate {
        role: Role,
        destination: String,
        remember: bool,
    },
    /// Show these messages next to their fields.
    ShowFieldErrors(FieldErrors),
    /// Show this message as a banner.
    ShowGeneralError(String),
}
