//! Defines the derived monthly summary shape.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Category;

/// The total amount spent in one category over a reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    /// The category the total belongs to.
    pub category: Category,
    /// The sum of the amounts of the matching transactions.
    pub total_amount: Decimal,
}

/// A user's financial summary for one calendar month.
///
/// Computed fresh on every request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    /// The sum of all income transactions in the period.
    pub total_income: Decimal,
    /// The sum of all expense transactions in the period.
    pub total_expense: Decimal,
    /// `total_income - total_expense`. Negative when the user spent more
    /// than they earned.
    pub net_savings: Decimal,
    /// Per-category totals for expense transactions only, one entry per
    /// category that had at least one transaction in the period.
    pub expense_breakdown: Vec<CategoryBreakdown>,
}
