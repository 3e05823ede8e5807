//! Defines the user store trait.

use crate::{
    Error,
    models::{User, UserID},
};

/// Handles the creation and retrieval of user accounts.
///
/// Authentication is out of scope for the ledger core, the store only
/// resolves IDs to accounts so transaction ownership can be checked.
pub trait UserStore {
    /// Create a new user with a unique email address.
    ///
    /// # Errors
    /// Returns [Error::DuplicateEmail] if the email is already taken.
    fn create(&mut self, email: &str) -> Result<User, Error>;

    /// Get a user by their ID.
    ///
    /// # Errors
    /// Returns [Error::UserNotFound] if `id` does not refer to a user.
    fn get(&self, id: UserID) -> Result<User, Error>;
}
