//! Aggregates transaction amounts by type and by category over a period.

use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use time::Date;

use crate::{
    Error,
    models::{CategoryBreakdown, TransactionType, UserID},
    stores::LedgerStore,
};

/// Sum the amounts of the owner's transactions of one type over a date
/// range (inclusive on both ends).
///
/// Returns exactly zero when no transactions match. The store reports an
/// absent sum for an empty result set, and this is the boundary where that
/// absence is coalesced, so downstream arithmetic never has to deal with a
/// missing value.
///
/// # Errors
/// This function will return an [Error::SqlError] if the store query
/// fails.
pub fn sum_by_type(
    user_id: UserID,
    kind: TransactionType,
    date_range: RangeInclusive<Date>,
    ledger: &impl LedgerStore,
) -> Result<Decimal, Error> {
    let total = ledger.sum_amount(user_id, kind, date_range)?;

    Ok(total.unwrap_or(Decimal::ZERO))
}

/// Sum the amounts of the owner's transactions of one type over a date
/// range, grouped by category.
///
/// Categories with no matching transactions are omitted rather than
/// reported with a zero total. Entries are ordered by category name, so
/// the output is stable for a given input set.
///
/// # Errors
/// This function will return an [Error::SqlError] if the store query
/// fails.
pub fn sum_by_category(
    user_id: UserID,
    kind: TransactionType,
    date_range: RangeInclusive<Date>,
    ledger: &impl LedgerStore,
) -> Result<Vec<CategoryBreakdown>, Error> {
    let groups = ledger.sum_amount_by_category(user_id, kind, date_range)?;

    Ok(groups
        .into_iter()
        .map(|(category, total_amount)| CategoryBreakdown {
            category,
            total_amount,
        })
        .collect())
}
