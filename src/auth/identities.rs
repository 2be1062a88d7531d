//! Known identity table
//!
//! The fixed set of mock accounts the login screen accepts. The table is an
//! ordinary value handed to the validator, so callers can swap it out.

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

pub const ADMIN_IDENTIFIER: &str = "admin@corteya.com";
pub const ADMIN_SECRET: &str = "admin123";
pub const BUSINESS_IDENTIFIER: &str = "propietario@corteya.com";
pub const BUSINESS_SECRET: &str = "barbero123";

/// Role resolved from a successful match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Business,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Business => "business",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One accepted (identifier, secret) pair and the role it unlocks.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct KnownIdentity {
    pub role: Role,
    pub identifier: String,
    pub secret: String,
}

// Keeps stored secrets out of `{:?}` on the table and the validator too.
impl fmt::Debug for KnownIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnownIdentity")
            .field("role", &self.role)
            .field("identifier", &self.identifier)
            .field("secret", &"***")
            .finish()
    }
}

impl KnownIdentity {
    pub fn new(role: Role, identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            role,
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// Exact, case-sensitive comparison of both halves.
    pub fn matches(&self, identifier: &str, secret: &str) -> bool {
        self.identifier == identifier && self.secret == secret
    }
}

/// Ordered list of known identities. Lookups scan in declared order and
/// the first entry matching both identifier and secret wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct IdentityTable {
    entries: Vec<KnownIdentity>,
}

impl Default for IdentityTable {
    /// The two demo accounts shipped with the login screen, admin first.
    fn default() -> Self {
        Self::new(vec![
            KnownIdentity::new(Role::Admin, ADMIN_IDENTIFIER, ADMIN_SECRET),
            KnownIdentity::new(Role::Business, BUSINESS_IDENTIFIER, BUSINESS_SECRET),
        ])
    }
}

impl IdentityTable {
    pub fn new(entries: Vec<KnownIdentity>) -> Self {
        Self { entries }
    }

    /// Returns the role of the first entry matching both values.
    pub fn resolve(&self, identifier: &str, secret: &str) -> Option<Role> {
        self.entries
            .iter()
            .find(|entry| entry.matches(identifier, secret))
            .map(|entry| entry.role)
    }

    /// Rows for the demo-account panel, in declared order.
    pub fn demo_accounts(&self) -> impl Iterator<Item = &KnownIdentity> {
        self.entries.iter()
    }

    /// Identifiers that appear more than once. Later duplicates are only
    /// reachable with a different secret than the earlier entry.
    pub fn duplicate_identifiers(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for entry in &self.entries {
            let id = entry.identifier.as_str();
            if !seen.insert(id) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }
        duplicates
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
