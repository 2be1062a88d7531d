pub mod auth;
pub mod config;
pub mod error;
pub mod form;
pub mod terminal;
pub mod utils;

pub use auth::{CredentialValidator, Credentials, Role, ValidationResult};
pub use crate::config::AppConfig;
pub use form::LoginForm;
