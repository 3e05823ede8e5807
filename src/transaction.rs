//! Validates and persists single-transaction requests, enforcing
//! ownership.

use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use time::Date;

use crate::{
    Error,
    error::MAX_NOTE_LENGTH,
    models::{Category, DatabaseID, Transaction, TransactionBuilder, TransactionType, UserID},
    stores::{LedgerStore, UserStore},
};

/// Validate a new transaction and persist it.
///
/// The boundary layer is expected to have handled shape validation (type
/// conversion, required fields), only domain rules are checked here: the
/// amount must be strictly positive, the note must fit the length bound,
/// and the owner must exist. A failed create leaves no record behind.
///
/// # Errors
/// This function will return a:
/// - [Error::NonPositiveAmount] if the amount is zero or negative,
/// - [Error::NoteTooLong] if the note exceeds the length bound,
/// - [Error::UserNotFound] if the builder's user ID does not refer to a
///   valid user,
/// - or [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    builder: TransactionBuilder,
    ledger: &mut impl LedgerStore,
    users: &impl UserStore,
) -> Result<Transaction, Error> {
    if builder.amount <= Decimal::ZERO {
        return Err(Error::NonPositiveAmount(builder.amount));
    }

    if let Some(note) = &builder.note {
        let length = note.chars().count();
        if length > MAX_NOTE_LENGTH {
            return Err(Error::NoteTooLong(length));
        }
    }

    users.get(builder.user_id)?;

    ledger.save(builder)
}

/// Delete a transaction on behalf of `user_id`.
///
/// The ownership check is mandatory: a transaction is only ever deleted by
/// its owner, and a failed delete leaves the record untouched and
/// retrievable. Deleting the same transaction twice fails the second time
/// with [Error::NotFound].
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `transaction_id` does not refer to a valid
///   transaction,
/// - [Error::NotOwner] if the transaction belongs to a different user,
/// - or [Error::SqlError] if there is an SQL error.
pub fn delete_transaction(
    user_id: UserID,
    transaction_id: DatabaseID,
    ledger: &mut impl LedgerStore,
) -> Result<(), Error> {
    let transaction = ledger.get(transaction_id)?;

    if transaction.user_id != user_id {
        return Err(Error::NotOwner);
    }

    ledger.delete(transaction_id)
}

/// All of a user's transactions, most recent date first.
///
/// Returns an empty vector, not an error, when the user has no
/// transactions.
pub fn transactions_for_user(
    user_id: UserID,
    ledger: &impl LedgerStore,
) -> Result<Vec<Transaction>, Error> {
    ledger.get_by_owner(user_id)
}

/// A user's transactions of one type, most recent date first.
pub fn transactions_by_type(
    user_id: UserID,
    kind: TransactionType,
    ledger: &impl LedgerStore,
) -> Result<Vec<Transaction>, Error> {
    ledger.get_by_owner_and_type(user_id, kind)
}

/// A user's transactions tagged with one category, most recent date first.
pub fn transactions_by_category(
    user_id: UserID,
    category: Category,
    ledger: &impl LedgerStore,
) -> Result<Vec<Transaction>, Error> {
    ledger.get_by_owner_and_category(user_id, category)
}

/// A user's transactions dated within `date_range` (inclusive on both
/// ends), most recent date first.
pub fn transactions_by_date_range(
    user_id: UserID,
    date_range: RangeInclusive<Date>,
    ledger: &impl LedgerStore,
) -> Result<Vec<Transaction>, Error> {
    ledger.get_by_owner_and_date_range(user_id, date_range)
}

#[cfg(test)]
mod record_manager_tests {
    use rust_decimal::Decimal;
    use time::macros::date;

    use crate::{
        Error,
        error::MAX_NOTE_LENGTH,
        models::{Category, Transaction, TransactionType, UserID},
        stores::{
            LedgerStore, UserStore,
            sqlite::{SQLiteLedgerStore, SQLiteUserStore, create_stores},
        },
    };

    use super::{
        create_transaction, delete_transaction, transactions_by_category,
        transactions_by_date_range, transactions_by_type, transactions_for_user,
    };

    fn get_stores() -> (SQLiteLedgerStore, SQLiteUserStore, UserID) {
        let connection = rusqlite::Connection::open_in_memory().unwrap();
        let (ledger, mut users) = create_stores(connection).unwrap();
        let user = users.create("test@test.com").unwrap();

        (ledger, users, user.id())
    }

    fn amount(raw: &str) -> Decimal {
        raw.parse().unwrap()
    }

    #[test]
    fn create_succeeds_and_returns_canonical_record() {
        let (mut ledger, users, user_id) = get_stores();

        let transaction = create_transaction(
            Transaction::build(
                user_id,
                amount("123.45"),
                TransactionType::Expense,
                Category::Food,
                date!(2024 - 03 - 10),
            )
            .note("lunch"),
            &mut ledger,
            &users,
        )
        .unwrap();

        assert_eq!(transaction.amount, amount("123.45"));
        assert_eq!(transaction.note.as_deref(), Some("lunch"));
        assert_eq!(ledger.get(transaction.id).unwrap(), transaction);
    }

    #[test]
    fn create_fails_on_zero_amount() {
        let (mut ledger, users, user_id) = get_stores();

        let result = create_transaction(
            Transaction::build(
                user_id,
                Decimal::ZERO,
                TransactionType::Expense,
                Category::Food,
                date!(2024 - 03 - 10),
            ),
            &mut ledger,
            &users,
        );

        assert_eq!(result, Err(Error::NonPositiveAmount(Decimal::ZERO)));
        assert_eq!(transactions_for_user(user_id, &ledger).unwrap(), vec![]);
    }

    #[test]
    fn create_fails_on_negative_amount() {
        let (mut ledger, users, user_id) = get_stores();

        let result = create_transaction(
            Transaction::build(
                user_id,
                amount("-5"),
                TransactionType::Expense,
                Category::Food,
                date!(2024 - 03 - 10),
            ),
            &mut ledger,
            &users,
        );

        assert_eq!(result, Err(Error::NonPositiveAmount(amount("-5"))));
        assert_eq!(transactions_for_user(user_id, &ledger).unwrap(), vec![]);
    }

    #[test]
    fn create_fails_on_unknown_owner() {
        let (mut ledger, users, user_id) = get_stores();

        let unknown_user = UserID::new(user_id.as_i64() + 42);
        let result = create_transaction(
            Transaction::build(
                unknown_user,
                amount("10"),
                TransactionType::Income,
                Category::Salary,
                date!(2024 - 03 - 10),
            ),
            &mut ledger,
            &users,
        );

        assert_eq!(result, Err(Error::UserNotFound(unknown_user)));
    }

    #[test]
    fn create_fails_on_oversized_note() {
        let (mut ledger, users, user_id) = get_stores();

        let note = "x".repeat(MAX_NOTE_LENGTH + 1);
        let result = create_transaction(
            Transaction::build(
                user_id,
                amount("10"),
                TransactionType::Expense,
                Category::Misc,
                date!(2024 - 03 - 10),
            )
            .note(&note),
            &mut ledger,
            &users,
        );

        assert_eq!(result, Err(Error::NoteTooLong(MAX_NOTE_LENGTH + 1)));
    }

    #[test]
    fn delete_succeeds_for_owner() {
        let (mut ledger, users, user_id) = get_stores();
        let transaction = create_transaction(
            Transaction::build(
                user_id,
                amount("10"),
                TransactionType::Expense,
                Category::Food,
                date!(2024 - 03 - 10),
            ),
            &mut ledger,
            &users,
        )
        .unwrap();

        delete_transaction(user_id, transaction.id, &mut ledger).unwrap();

        assert_eq!(ledger.get(transaction.id), Err(Error::NotFound));
    }

    #[test]
    fn delete_fails_for_non_owner_and_leaves_record() {
        let (mut ledger, mut users, user_id) = get_stores();
        let other = users.create("other@test.com").unwrap();
        let transaction = create_transaction(
            Transaction::build(
                user_id,
                amount("10"),
                TransactionType::Expense,
                Category::Food,
                date!(2024 - 03 - 10),
            ),
            &mut ledger,
            &users,
        )
        .unwrap();

        let result = delete_transaction(other.id(), transaction.id, &mut ledger);

        assert_eq!(result, Err(Error::NotOwner));
        assert_eq!(ledger.get(transaction.id).unwrap(), transaction);
    }

    #[test]
    fn delete_fails_on_missing_transaction() {
        let (mut ledger, _, user_id) = get_stores();

        assert_eq!(
            delete_transaction(user_id, 999, &mut ledger),
            Err(Error::NotFound)
        );
    }

    #[test]
    fn re_delete_fails_with_not_found() {
        let (mut ledger, users, user_id) = get_stores();
        let transaction = create_transaction(
            Transaction::build(
                user_id,
                amount("10"),
                TransactionType::Expense,
                Category::Food,
                date!(2024 - 03 - 10),
            ),
            &mut ledger,
            &users,
        )
        .unwrap();
        delete_transaction(user_id, transaction.id, &mut ledger).unwrap();

        let result = delete_transaction(user_id, transaction.id, &mut ledger);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn list_operations_return_empty_when_nothing_matches() {
        let (ledger, _, user_id) = get_stores();

        assert_eq!(transactions_for_user(user_id, &ledger).unwrap(), vec![]);
        assert_eq!(
            transactions_by_type(user_id, TransactionType::Income, &ledger).unwrap(),
            vec![]
        );
        assert_eq!(
            transactions_by_category(user_id, Category::Rent, &ledger).unwrap(),
            vec![]
        );
        assert_eq!(
            transactions_by_date_range(
                user_id,
                date!(2024 - 03 - 01)..=date!(2024 - 03 - 31),
                &ledger
            )
            .unwrap(),
            vec![]
        );
    }

    #[test]
    fn listings_are_ordered_most_recent_first() {
        let (mut ledger, users, user_id) = get_stores();
        let dates = [
            date!(2024 - 03 - 05),
            date!(2024 - 03 - 20),
            date!(2024 - 03 - 10),
        ];
        for date in dates {
            create_transaction(
                Transaction::build(
                    user_id,
                    amount("10"),
                    TransactionType::Expense,
                    Category::Food,
                    date,
                ),
                &mut ledger,
                &users,
            )
            .unwrap();
        }

        let transactions = transactions_for_user(user_id, &ledger).unwrap();

        let got_dates: Vec<_> = transactions.iter().map(|t| t.date).collect();
        assert_eq!(
            got_dates,
            vec![
                date!(2024 - 03 - 20),
                date!(2024 - 03 - 10),
                date!(2024 - 03 - 05)
            ]
        );
    }
}
