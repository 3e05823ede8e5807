//! Defines the transaction type and the closed set of spending categories.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Whether a transaction records money earned or money spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Money flowing into the ledger.
    Income,
    /// Money flowing out of the ledger.
    Expense,
}

impl TransactionType {
    /// The canonical string form, as stored in the database and sent over
    /// the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a transaction type.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unknown transaction type: {0}")]
pub struct UnknownTransactionType(pub String);

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INCOME" => Ok(TransactionType::Income),
            "EXPENSE" => Ok(TransactionType::Expense),
            other => Err(UnknownTransactionType(other.to_owned())),
        }
    }
}

/// The closed set of categories a transaction can be tagged with.
///
/// The first nine categories are intended for expenses and the rest for
/// income, but the intent is not enforced: any category may be combined
/// with any [TransactionType].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Groceries and eating out.
    Food,
    /// Transport, trips and holidays.
    Travel,
    /// Rent and mortgage payments.
    Rent,
    /// General retail purchases.
    Shopping,
    /// Power, water, internet and similar recurring services.
    Utilities,
    /// Movies, games, events.
    Entertainment,
    /// Medical costs and insurance.
    Healthcare,
    /// Tuition, courses and books.
    Education,
    /// Expenses that fit nowhere else.
    Misc,
    /// Regular wages.
    Salary,
    /// Contract and side-gig income.
    Freelance,
    /// Dividends, interest and capital gains.
    Investment,
    /// Money received as a gift.
    Gift,
    /// Income that fits nowhere else.
    Other,
}

impl Category {
    /// The canonical string form, as stored in the database and sent over
    /// the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "FOOD",
            Category::Travel => "TRAVEL",
            Category::Rent => "RENT",
            Category::Shopping => "SHOPPING",
            Category::Utilities => "UTILITIES",
            Category::Entertainment => "ENTERTAINMENT",
            Category::Healthcare => "HEALTHCARE",
            Category::Education => "EDUCATION",
            Category::Misc => "MISC",
            Category::Salary => "SALARY",
            Category::Freelance => "FREELANCE",
            Category::Investment => "INVESTMENT",
            Category::Gift => "GIFT",
            Category::Other => "OTHER",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a category.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FOOD" => Ok(Category::Food),
            "TRAVEL" => Ok(Category::Travel),
            "RENT" => Ok(Category::Rent),
            "SHOPPING" => Ok(Category::Shopping),
            "UTILITIES" => Ok(Category::Utilities),
            "ENTERTAINMENT" => Ok(Category::Entertainment),
            "HEALTHCARE" => Ok(Category::Healthcare),
            "EDUCATION" => Ok(Category::Education),
            "MISC" => Ok(Category::Misc),
            "SALARY" => Ok(Category::Salary),
            "FREELANCE" => Ok(Category::Freelance),
            "INVESTMENT" => Ok(Category::Investment),
            "GIFT" => Ok(Category::Gift),
            "OTHER" => Ok(Category::Other),
            other => Err(UnknownCategory(other.to_owned())),
        }
    }
}
