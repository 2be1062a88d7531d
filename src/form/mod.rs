//! Login form
//!
//! Per-attempt form state around the credential validator.

pub mod results;
pub mod state;

pub use results::{AttemptState, SubmitOutcome};
pub use state::LoginForm;
