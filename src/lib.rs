//! Spendlog is the core of a personal finance ledger: users record income
//! and expense transactions tagged with a category and a date, and retrieve
//! aggregated monthly summaries.
//!
//! The crate is organised around the store traits in [stores]: the
//! [transaction record manager](transaction), the
//! [aggregation engine](aggregation) and the
//! [summary assembler](summary) are plain functions generic over
//! [LedgerStore](stores::LedgerStore), and a SQLite reference backend lives
//! in [stores::sqlite]. HTTP routing, request shape validation and
//! authentication are the host application's responsibility.
//!
//! ```no_run
//! use spendlog::{
//!     models::{Category, Transaction, TransactionType},
//!     stores::{UserStore, sqlite::create_stores},
//!     summary::monthly_summary,
//!     transaction::create_transaction,
//! };
//! use time::macros::date;
//!
//! # fn main() -> Result<(), spendlog::Error> {
//! let connection = rusqlite::Connection::open("ledger.db").map_err(spendlog::Error::from)?;
//! let (mut ledger, mut users) = create_stores(connection)?;
//!
//! let user = users.create("me@example.com")?;
//! create_transaction(
//!     Transaction::build(
//!         user.id(),
//!         "1000".parse().unwrap(),
//!         TransactionType::Income,
//!         Category::Salary,
//!         date!(2024 - 03 - 05),
//!     ),
//!     &mut ledger,
//!     &users,
//! )?;
//!
//! let summary = monthly_summary(user.id(), 2024, 3, &ledger)?;
//! assert_eq!(summary.net_savings, summary.total_income - summary.total_expense);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod aggregation;
pub mod db;
mod error;
pub mod models;
pub mod period;
pub mod stores;
pub mod summary;
pub mod transaction;

pub use error::{Error, MAX_NOTE_LENGTH};
