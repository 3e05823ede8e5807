//! Defines the ledger store trait.

use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use time::Date;

use crate::{
    Error,
    models::{Category, DatabaseID, Transaction, TransactionBuilder, TransactionType, UserID},
};

/// Handles the persistence and retrieval of transactions.
///
/// Every query is scoped to a single owner. Implementations must return
/// list results ordered by date descending, with ties broken by most recent
/// insertion first, and each aggregate read must be a single atomic query
/// against the backing store.
pub trait LedgerStore {
    /// Persist a new transaction, assigning its ID and creation timestamp.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if there is an SQL error.
    fn save(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error>;

    /// Retrieve a transaction by its `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a transaction.
    fn get(&self, id: DatabaseID) -> Result<Transaction, Error>;

    /// Remove a transaction permanently.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a transaction.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error>;

    /// All transactions owned by `user_id`.
    fn get_by_owner(&self, user_id: UserID) -> Result<Vec<Transaction>, Error>;

    /// The transactions owned by `user_id` with the given type.
    fn get_by_owner_and_type(
        &self,
        user_id: UserID,
        kind: TransactionType,
    ) -> Result<Vec<Transaction>, Error>;

    /// The transactions owned by `user_id` tagged with `category`.
    fn get_by_owner_and_category(
        &self,
        user_id: UserID,
        category: Category,
    ) -> Result<Vec<Transaction>, Error>;

    /// The transactions owned by `user_id` dated within `date_range`
    /// (inclusive on both ends).
    fn get_by_owner_and_date_range(
        &self,
        user_id: UserID,
        date_range: RangeInclusive<Date>,
    ) -> Result<Vec<Transaction>, Error>;

    /// The sum of the amounts of the owner's transactions of the given type
    /// dated within `date_range` (inclusive).
    ///
    /// Returns `None` when no transactions match. Callers that need a total
    /// should go through
    /// [sum_by_type](crate::aggregation::sum_by_type), which coalesces the
    /// absent sum to zero.
    fn sum_amount(
        &self,
        user_id: UserID,
        kind: TransactionType,
        date_range: RangeInclusive<Date>,
    ) -> Result<Option<Decimal>, Error>;

    /// Per-category sums of the owner's transactions of the given type
    /// dated within `date_range` (inclusive).
    ///
    /// Categories with no matching transactions are omitted. The returned
    /// order must be stable for a given input set.
    fn sum_amount_by_category(
        &self,
        user_id: UserID,
        kind: TransactionType,
        date_range: RangeInclusive<Date>,
    ) -> Result<Vec<(Category, Decimal)>, Error>;
}
