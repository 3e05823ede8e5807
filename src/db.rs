//! Defines traits and helpers for setting up the ledger's database schema.

use rusqlite::{Connection, Row, Transaction as SqlTransaction};

use crate::{
    Error,
    stores::sqlite::{SQLiteLedgerStore, SQLiteUserStore},
};

/// A trait for adding an object's schema to a database.
pub trait CreateTable {
    /// Create the table(s) backing the implementing store.
    ///
    /// # Errors
    /// Returns an error if there is an SQL error.
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error>;
}

/// A trait for mapping a `rusqlite::Row` from a SQLite database to a
/// concrete rust type.
pub trait MapRow {
    /// The type a row is mapped to.
    type ReturnType;

    /// Convert a row into a concrete type.
    ///
    /// **Note:** This function expects that the row object contains all the
    /// table columns in the order they were defined.
    ///
    /// # Errors
    /// Returns an error if a row item cannot be converted into the
    /// corresponding rust type.
    fn map_row(row: &Row) -> Result<Self::ReturnType, rusqlite::Error> {
        Self::map_row_with_offset(row, 0)
    }

    /// Convert a row into a concrete type, reading from the column at
    /// `offset`.
    ///
    /// The offset is useful when tables have been joined and two types are
    /// constructed from the one query.
    ///
    /// # Errors
    /// Returns an error if a row item cannot be converted into the
    /// corresponding rust type, or if an invalid column index was used.
    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error>;
}

/// Create the tables for the domain models.
///
/// The tables are created inside a single exclusive transaction so a
/// half-initialized schema is never observable.
///
/// # Errors
/// Returns an error if a table cannot be created or there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    SQLiteUserStore::create_table(&transaction)?;
    SQLiteLedgerStore::create_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
