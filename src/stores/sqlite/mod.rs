//! Contains the SQLite implementations of the store traits and a
//! convenience function for wiring them to one connection.

mod ledger;
mod user;

pub use ledger::SQLiteLedgerStore;
pub use user::SQLiteUserStore;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize};

/// Creates the SQLite backed stores over a shared connection.
///
/// This function will modify the database by adding the tables for the
/// domain models and enabling foreign key enforcement.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_stores(
    db_connection: Connection,
) -> Result<(SQLiteLedgerStore, SQLiteUserStore), Error> {
    db_connection.pragma_update(None, "foreign_keys", "ON")?;
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));
    let ledger_store = SQLiteLedgerStore::new(connection.clone());
    let user_store = SQLiteUserStore::new(connection);

    Ok((ledger_store, user_store))
}
