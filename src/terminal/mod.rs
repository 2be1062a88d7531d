//! Terminal front end
//!
//! Drives the login form from line-based input, the terminal counterpart
//! of the web login screen.

pub mod prompt;

pub use prompt::{LoginPrompt, render_demo_accounts};
