//! Assembles the monthly summary from the aggregation results.

use crate::{
    Error,
    aggregation::{sum_by_category, sum_by_type},
    models::{MonthlySummary, TransactionType, UserID},
    period::month_range,
    stores::LedgerStore,
};

/// Compute a user's financial summary for one calendar month.
///
/// The expense breakdown covers expense transactions only, income is never
/// broken down by category. Net savings is `total_income - total_expense`
/// and may be negative. The summary is computed fresh on every call,
/// nothing is cached.
///
/// # Errors
/// This function will return a:
/// - [Error::MonthOutOfRange] or [Error::YearOutOfRange] if the period is
///   invalid,
/// - or [Error::SqlError] if a store query fails.
pub fn monthly_summary(
    user_id: UserID,
    year: i32,
    month: u8,
    ledger: &impl LedgerStore,
) -> Result<MonthlySummary, Error> {
    let period = month_range(year, month)?;

    let total_income = sum_by_type(user_id, TransactionType::Income, period.clone(), ledger)?;
    let total_expense = sum_by_type(user_id, TransactionType::Expense, period.clone(), ledger)?;
    let expense_breakdown = sum_by_category(user_id, TransactionType::Expense, period, ledger)?;

    Ok(MonthlySummary {
        total_income,
        total_expense,
        net_savings: total_income - total_expense,
        expense_breakdown,
    })
}
