//! Submitted credentials
//!
//! Values built from a single login submission. They are validated once and
//! dropped; nothing here is ever stored.

use std::fmt;

/// Identifier and secret as typed by the user.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

// Secrets must not leak through `{:?}` in log lines.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"***")
            .finish()
    }
}

/// A full form submission.
///
/// The `remember` flag has no bearing on validation and is handed back to
/// the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSubmission {
    pub credentials: Credentials,
    pub remember: bool,
}

impl LoginSubmission {
    pub fn new(credentials: Credentials, remember: bool) -> Self {
        Self {
            credentials,
            remember,
        }
    }
}
