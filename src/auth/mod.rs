//! Authentication system
//!
//! Handles credential validation and role resolution for the login flow.

pub mod credentials;
pub mod identities;
pub mod results;
pub mod validator;

pub use credentials::{Credentials, LoginSubmission};
pub use identities::{IdentityTable, KnownIdentity, Role};
pub use results::{Field, FieldErrors, ValidationResult};
pub use validator::{CredentialValidator, DEFAULT_MIN_SECRET_LENGTH};
