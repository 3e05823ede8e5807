//! Defines the transaction record, the core type of the ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::models::{Category, DatabaseID, TransactionType, UserID};

/// A single entry in a user's ledger: an event where money was either
/// earned or spent.
///
/// Transactions are immutable once created. They are never updated in
/// place, only created and deleted, and they belong to exactly one user for
/// their whole lifetime.
///
/// To create a new `Transaction`, use [Transaction::build] and pass the
/// builder to
/// [create_transaction](crate::transaction::create_transaction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: DatabaseID,
    /// The ID of the user that owns this transaction.
    pub user_id: UserID,
    /// How much money moved. Always greater than zero, the direction is
    /// given by `kind`.
    pub amount: Decimal,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// The category the transaction is tagged with.
    pub category: Category,
    /// The calendar day the money moved. No time component.
    pub date: Date,
    /// Free text attached by the user.
    pub note: Option<String>,
    /// When the record was created. Assigned by the store, never changes.
    pub created_at: OffsetDateTime,
}

impl Transaction {
    /// Start building a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        user_id: UserID,
        amount: Decimal,
        kind: TransactionType,
        category: Category,
        date: Date,
    ) -> TransactionBuilder {
        TransactionBuilder {
            user_id,
            amount,
            kind,
            category,
            date,
            note: None,
        }
    }
}

/// A builder for creating [Transaction] records.
///
/// The required fields are taken up front, the note is optional. Finalize
/// the builder with
/// [create_transaction](crate::transaction::create_transaction), which
/// validates it and persists the record.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    /// The ID of the user the transaction will belong to.
    pub user_id: UserID,
    /// The monetary amount. Must be greater than zero.
    pub amount: Decimal,
    /// Whether the transaction is income or an expense.
    pub kind: TransactionType,
    /// The category to tag the transaction with.
    ///
    /// Categories are not cross-checked against `kind`, any combination is
    /// accepted.
    pub category: Category,
    /// The calendar day the money moved.
    pub date: Date,
    /// Free text attached by the user, at most
    /// [MAX_NOTE_LENGTH](crate::MAX_NOTE_LENGTH) characters.
    pub note: Option<String>,
}

impl TransactionBuilder {
    /// Set the note for the transaction.
    pub fn note(mut self, note: &str) -> Self {
        self.note = Some(note.to_owned());
        self
    }
}
