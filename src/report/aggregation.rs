//! Transaction aggregation for the report.
//!
//! Every function here does a full scan of the transactions it is given.
//! Nothing is cached between renders.

use crate::{
    category::{CategoryName, CategoryRegistry},
    transaction::{Transaction, TransactionType},
};

/// The income and expense totals of a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    /// The sum of all income amounts.
    pub income: f64,
    /// The sum of all expense amounts.
    pub expense: f64,
}

impl Totals {
    /// Income minus expenses. Negative when more was spent than earned.
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

/// Sums the income and expense amounts of `transactions`.
pub fn calculate_totals(transactions: &[Transaction]) -> Totals {
    transactions
        .iter()
        .fold(Totals::default(), |mut totals, transaction| {
            match transaction.type_ {
                TransactionType::Income => totals.income += transaction.amount,
                TransactionType::Expense => totals.expense += transaction.amount,
            }

            totals
        })
}

/// The total amount recorded against one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// The category from the registry.
    pub category: CategoryName,
    /// The sum of the amounts of the matching transactions.
    pub total: f64,
}

/// Everything shown in the report section.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Totals over every transaction, whatever its category.
    pub totals: Totals,
    /// Income categories with a positive total, in registry order.
    pub income_breakdown: Vec<CategoryTotal>,
    /// Expense categories with a positive total, in registry order.
    pub expense_breakdown: Vec<CategoryTotal>,
}

/// Build the report for `transactions` using the categories in `registry`.
///
/// A transaction only counts towards a category if its type matches the
/// category's list and its category text is an exact match. Transactions
/// whose category is not in the registry still count towards the totals.
pub fn build_report(transactions: &[Transaction], registry: &CategoryRegistry) -> Report {
    Report {
        totals: calculate_totals(transactions),
        income_breakdown: category_breakdown(
            transactions,
            TransactionType::Income,
            registry.categories(TransactionType::Income),
        ),
        expense_breakdown: category_breakdown(
            transactions,
            TransactionType::Expense,
            registry.categories(TransactionType::Expense),
        ),
    }
}

fn category_breakdown(
    transactions: &[Transaction],
    type_: TransactionType,
    categories: &[CategoryName],
) -> Vec<CategoryTotal> {
    categories
        .iter()
        .map(|category| CategoryTotal {
            category: category.clone(),
            total: transactions
                .iter()
                .filter(|transaction| {
                    transaction.type_ == type_ && transaction.category == category.as_ref()
                })
                .map(|transaction| transaction.amount)
                .sum(),
        })
        .filter(|category_total| category_total.total > 0.0)
        .collect()
}
