//! Implements a SQLite backed ledger store.

use std::{
    collections::HashMap,
    ops::RangeInclusive,
    str::FromStr,
    sync::{Arc, Mutex},
};

use rust_decimal::Decimal;
use rusqlite::{Connection, Row, types::Type};
use time::{Date, OffsetDateTime};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Category, DatabaseID, Transaction, TransactionBuilder, TransactionType, UserID},
    stores::LedgerStore,
};

/// Stores transactions in a SQLite database.
///
/// Amounts are stored as TEXT and summed in `Decimal` arithmetic so that
/// monetary values never pass through floating point.
///
/// Note that a transaction references the [User](crate::models::User)
/// model, so the user table must also be set up in the database (see
/// [create_stores](crate::stores::sqlite::create_stores)).
#[derive(Debug, Clone)]
pub struct SQLiteLedgerStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteLedgerStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl LedgerStore for SQLiteLedgerStore {
    /// Insert a new transaction into the database, assigning its ID and
    /// creation timestamp.
    ///
    /// # Panics
    /// Panics if the database lock is poisoned.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::UserNotFound] if the builder's user ID does not refer to a
    ///   valid user,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn save(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let created_at = OffsetDateTime::now_utc();
        let connection = self.connection.lock().unwrap();

        let transaction = connection
            .prepare(
                "INSERT INTO \"transaction\" (user_id, amount, kind, category, date, note, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 RETURNING id, user_id, amount, kind, category, date, note, created_at",
            )?
            .query_row(
                (
                    builder.user_id.as_i64(),
                    builder.amount.to_string(),
                    builder.kind.as_str(),
                    builder.category.as_str(),
                    builder.date,
                    &builder.note,
                    created_at,
                ),
                Self::map_row,
            )
            .map_err(|error| match error {
                rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error {
                        code: _,
                        extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
                    },
                    _,
                ) => Error::UserNotFound(builder.user_id),
                error => error.into(),
            })?;

        Ok(transaction)
    }

    /// Retrieve a transaction in the database by its `id`.
    ///
    /// # Panics
    /// Panics if the database lock is poisoned.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn get(&self, id: DatabaseID) -> Result<Transaction, Error> {
        let transaction = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, user_id, amount, kind, category, date, note, created_at
                 FROM \"transaction\" WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], Self::map_row)?;

        Ok(transaction)
    }

    /// Remove a transaction from the database permanently.
    ///
    /// # Panics
    /// Panics if the database lock is poisoned.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error> {
        let rows_deleted = self
            .connection
            .lock()
            .unwrap()
            .execute("DELETE FROM \"transaction\" WHERE id = ?1", [id])?;

        if rows_deleted == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    fn get_by_owner(&self, user_id: UserID) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, user_id, amount, kind, category, date, note, created_at
                 FROM \"transaction\" WHERE user_id = :user_id
                 ORDER BY date DESC, id DESC",
            )?
            .query_map(&[(":user_id", &user_id.as_i64())], Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    fn get_by_owner_and_type(
        &self,
        user_id: UserID,
        kind: TransactionType,
    ) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, user_id, amount, kind, category, date, note, created_at
                 FROM \"transaction\" WHERE user_id = ?1 AND kind = ?2
                 ORDER BY date DESC, id DESC",
            )?
            .query_map((user_id.as_i64(), kind.as_str()), Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    fn get_by_owner_and_category(
        &self,
        user_id: UserID,
        category: Category,
    ) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, user_id, amount, kind, category, date, note, created_at
                 FROM \"transaction\" WHERE user_id = ?1 AND category = ?2
                 ORDER BY date DESC, id DESC",
            )?
            .query_map((user_id.as_i64(), category.as_str()), Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    fn get_by_owner_and_date_range(
        &self,
        user_id: UserID,
        date_range: RangeInclusive<Date>,
    ) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, user_id, amount, kind, category, date, note, created_at
                 FROM \"transaction\" WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
                 ORDER BY date DESC, id DESC",
            )?
            .query_map(
                (user_id.as_i64(), date_range.start(), date_range.end()),
                Self::map_row,
            )?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    /// Sum the owner's transaction amounts for one type over a date range.
    ///
    /// The matching amounts are fetched with a single SELECT and folded in
    /// `Decimal` arithmetic, SQLite's own `SUM()` would coerce the TEXT
    /// amounts to floats.
    ///
    /// # Panics
    /// Panics if the database lock is poisoned.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error.
    fn sum_amount(
        &self,
        user_id: UserID,
        kind: TransactionType,
        date_range: RangeInclusive<Date>,
    ) -> Result<Option<Decimal>, Error> {
        let connection = self.connection.lock().unwrap();
        let mut statement = connection.prepare(
            "SELECT amount FROM \"transaction\"
             WHERE user_id = ?1 AND kind = ?2 AND date BETWEEN ?3 AND ?4",
        )?;

        let rows = statement.query_map(
            (
                user_id.as_i64(),
                kind.as_str(),
                date_range.start(),
                date_range.end(),
            ),
            |row| row.get::<_, String>(0),
        )?;

        let mut total: Option<Decimal> = None;

        for raw_amount in rows {
            let amount: Decimal = parse_text_column(0, raw_amount?).map_err(Error::SqlError)?;
            total = Some(total.unwrap_or(Decimal::ZERO) + amount);
        }

        Ok(total)
    }

    /// Sum the owner's transaction amounts per category for one type over a
    /// date range.
    ///
    /// Categories with no matching transactions are omitted. Groups are
    /// ordered by category name so the output is stable for a given input
    /// set.
    ///
    /// # Panics
    /// Panics if the database lock is poisoned.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error.
    fn sum_amount_by_category(
        &self,
        user_id: UserID,
        kind: TransactionType,
        date_range: RangeInclusive<Date>,
    ) -> Result<Vec<(Category, Decimal)>, Error> {
        let connection = self.connection.lock().unwrap();
        let mut statement = connection.prepare(
            "SELECT category, amount FROM \"transaction\"
             WHERE user_id = ?1 AND kind = ?2 AND date BETWEEN ?3 AND ?4",
        )?;

        let rows = statement.query_map(
            (
                user_id.as_i64(),
                kind.as_str(),
                date_range.start(),
                date_range.end(),
            ),
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
        )?;

        let mut totals: HashMap<Category, Decimal> = HashMap::new();

        for row in rows {
            let (raw_category, raw_amount) = row?;
            let category: Category =
                parse_text_column(0, raw_category).map_err(Error::SqlError)?;
            let amount: Decimal = parse_text_column(1, raw_amount).map_err(Error::SqlError)?;

            *totals.entry(category).or_insert(Decimal::ZERO) += amount;
        }

        let mut groups: Vec<(Category, Decimal)> = totals.into_iter().collect();
        groups.sort_by_key(|(category, _)| category.as_str());

        Ok(groups)
    }
}

impl CreateTable for SQLiteLedgerStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS \"transaction\" (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    user_id INTEGER NOT NULL,
                    amount TEXT NOT NULL,
                    kind TEXT NOT NULL,
                    category TEXT NOT NULL,
                    date TEXT NOT NULL,
                    note TEXT,
                    created_at TEXT NOT NULL,
                    FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
                    )",
            (),
        )?;

        // Composite index used by the owner-scoped queries and aggregates.
        connection.execute(
            "CREATE INDEX IF NOT EXISTS idx_transaction_owner_date
             ON \"transaction\"(user_id, date)",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteLedgerStore {
    type ReturnType = Transaction;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = row.get(offset)?;
        let user_id = UserID::new(row.get(offset + 1)?);
        let amount = parse_text_column(offset + 2, row.get(offset + 2)?)?;
        let kind = parse_text_column(offset + 3, row.get(offset + 3)?)?;
        let category = parse_text_column(offset + 4, row.get(offset + 4)?)?;
        let date = row.get(offset + 5)?;
        let note = row.get(offset + 6)?;
        let created_at = row.get(offset + 7)?;

        Ok(Transaction {
            id,
            user_id,
            amount,
            kind,
            category,
            date,
            note,
            created_at,
        })
    }
}

/// Parse a TEXT column into a typed value, reporting failures as a row
/// conversion error on the column at `index`.
fn parse_text_column<T>(index: usize, raw: String) -> Result<T, rusqlite::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse().map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(error))
    })
}
