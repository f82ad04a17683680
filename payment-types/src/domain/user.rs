//! User domain model.

use serde::{Deserialize, Serialize};

/// A user who owns payments.
///
/// The email address is the exact-match identity key for query purposes;
/// matching is byte-for-byte and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Display name of the user
    pub name: String,
    /// Email address, used as the query identity key
    pub email: String,
}

impl User {
    /// Creates a new user.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
