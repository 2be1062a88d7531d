//! Error types
//!
//! Field-level and general login errors shown to the user, plus the
//! application errors that can stop the binary.

use crate::auth::results::Field;
use std::fmt;
use std::io;

/// Structural problem with a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    IdentifierRequired,
    IdentifierMalformed,
    SecretRequired,
    SecretTooShort { min: usize },
}

impl FieldError {
    /// The field this error is displayed next to.
    pub fn field(&self) -> Field {
        match self {
            FieldError::IdentifierRequired | FieldError::IdentifierMalformed => Field::Identifier,
            FieldError::SecretRequired | FieldError::SecretTooShort { .. } => Field::Secret,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::IdentifierRequired => write!(f, "identifier is required"),
            FieldError::IdentifierMalformed => {
                write!(f, "identifier must be a valid email-like value")
            }
            FieldError::SecretRequired => write!(f, "secret is required"),
            FieldError::SecretTooShort { min } => {
                write!(f, "secret must be at least {} characters", min)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Banner-level error for a structurally valid submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    UnknownIdentity,
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::UnknownIdentity => {
                write!(f, "credentials incorrect, verify your identifier and secret.")
            }
        }
    }
}

impl std::error::Error for LoginError {}

/// Errors that abort the application rather than a single login attempt.
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::IoError(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::IoError(error)
    }
}
