//! Input validation utilities
//!
//! Structural checks shared by the credential validator.

use lazy_regex::{Lazy, Regex, lazy_regex};

// Unanchored: any `<non-space>@<non-space>.<non-space>` run inside the
// input is enough.
static RE_EMAIL_LIKE: Lazy<Regex> = lazy_regex!(r"\S+@\S+\.\S+");

/// Whether `input` contains an email-like value.
pub fn is_email_like(input: &str) -> bool {
    RE_EMAIL_LIKE.is_match(input)
}

/// Whether `input` has at least `min` characters (not bytes).
pub fn meets_min_length(input: &str, min: usize) -> bool {
    input.chars().count() >= min
}
