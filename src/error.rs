//! Defines the crate level error type.

use rust_decimal::Decimal;

use crate::models::UserID;

/// The length limit for a transaction note, in characters.
pub const MAX_NOTE_LENGTH: usize = 500;

/// The errors that may occur in the ledger core.
///
/// All variants are terminal: the core performs no retries, and a failed
/// operation leaves no partial side effects.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A zero or negative amount was used to create a transaction.
    ///
    /// Transactions record money that moved. The direction is captured by
    /// the transaction type, not by the sign of the amount.
    #[error("transaction amounts must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    /// The note attached to a transaction exceeds [MAX_NOTE_LENGTH]
    /// characters.
    #[error("notes must be at most {MAX_NOTE_LENGTH} characters, got {0}")]
    NoteTooLong(usize),

    /// A month outside 1-12 was used to resolve a reporting period.
    #[error("month must be between 1 and 12, got {0}")]
    MonthOutOfRange(u8),

    /// A year outside the range supported by the date type was used to
    /// resolve a reporting period.
    #[error("year {0} is outside the supported date range")]
    YearOutOfRange(i32),

    /// The user ID does not refer to a valid user.
    #[error("the user ID {0} does not refer to a valid user")]
    UserNotFound(UserID),

    /// The email used to create a user is already taken.
    #[error("the email address is already in use")]
    DuplicateEmail,

    /// There was no transaction that matched the given details.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("a transaction with the given details could not be found")]
    NotFound,

    /// The operation targets a transaction that belongs to another user.
    ///
    /// The record is left untouched when this error is returned.
    #[error("the transaction belongs to a different user")]
    NotOwner,

    /// An unhandled/unexpected SQL error.
    ///
    /// Store level failures are surfaced unchanged, the core does not mask
    /// or retry them.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}
