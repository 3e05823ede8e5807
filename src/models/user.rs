//! Defines a user of the ledger and its ID newtype.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A newtype wrapper for integer user IDs.
///
/// This helps disambiguate user IDs from other types of IDs, leading to
/// better compile time errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserID(i64);

impl UserID {
    /// Create a user ID from its integer form.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// The integer form of the ID, for use in database queries.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for UserID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// An account that owns transactions.
///
/// Authentication and credentials are handled outside the ledger core, so a
/// user here is only an ID and a unique email address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserID,
    email: String,
}

impl User {
    /// Create a user from its parts.
    ///
    /// This does not persist anything, see
    /// [UserStore::create](crate::stores::UserStore::create).
    pub fn new(id: UserID, email: String) -> Self {
        Self { id, email }
    }

    /// The user's ID in the store.
    pub fn id(&self) -> UserID {
        self.id
    }

    /// The email address associated with the user.
    pub fn email(&self) -> &str {
        &self.email
    }
}
