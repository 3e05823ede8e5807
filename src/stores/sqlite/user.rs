//! Implements a SQLite backed user store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{User, UserID},
    stores::UserStore,
};

/// Stores user accounts in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteUserStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteUserStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl UserStore for SQLiteUserStore {
    /// Create and insert a new user into the database.
    ///
    /// # Panics
    /// Panics if the database lock is poisoned.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DuplicateEmail] if the email is already in use,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn create(&mut self, email: &str) -> Result<User, Error> {
        let connection = self.connection.lock().unwrap();

        connection
            .execute("INSERT INTO user (email) VALUES (?1)", [email])
            .map_err(|error| match error {
                // Code 2067 occurs when a UNIQUE constraint failed.
                rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                    if sql_error.extended_code == 2067 && desc.contains("email") =>
                {
                    Error::DuplicateEmail
                }
                error => error.into(),
            })?;

        let id = UserID::new(connection.last_insert_rowid());

        Ok(User::new(id, email.to_owned()))
    }

    /// Get the user from the database that has the specified `id`.
    ///
    /// # Panics
    /// Panics if the database lock is poisoned.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::UserNotFound] if there is no user with the specified ID,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn get(&self, id: UserID) -> Result<User, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, email FROM user WHERE id = :id")?
            .query_row(&[(":id", &id.as_i64())], Self::map_row)
            .map_err(|error| match error {
                rusqlite::Error::QueryReturnedNoRows => Error::UserNotFound(id),
                error => error.into(),
            })
    }
}

impl CreateTable for SQLiteUserStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS user (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    email TEXT UNIQUE NOT NULL
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteUserStore {
    type ReturnType = User;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = UserID::new(row.get(offset)?);
        let email: String = row.get(offset + 1)?;

        Ok(User::new(id, email))
    }
}
