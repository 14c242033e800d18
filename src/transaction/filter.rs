//! Filtering the transaction list by type and category.

use serde::{Deserialize, Serialize};

use crate::transaction::{Transaction, TransactionType};

/// Which transaction types to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    /// Keep both income and expenses.
    #[default]
    All,
    /// Keep income only.
    Income,
    /// Keep expenses only.
    Expense,
}

impl TypeFilter {
    /// Whether a transaction of type `type_` passes this filter.
    pub fn matches(self, type_: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => type_ == TransactionType::Income,
            TypeFilter::Expense => type_ == TransactionType::Expense,
        }
    }
}

/// The filter controls, read from the query string of the page or partial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// The type of transactions to keep.
    #[serde(default)]
    pub type_: TypeFilter,
    /// Keep transactions whose category contains this text. Empty keeps all.
    #[serde(default)]
    pub category: String,
}

impl TransactionFilter {
    /// Whether `transaction` passes the filter.
    ///
    /// The category match is a case-sensitive substring match.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.type_.matches(transaction.type_)
            && (self.category.is_empty() || transaction.category.contains(&self.category))
    }
}

/// Lazily filter `transactions`, pairing each survivor with its position in
/// the unfiltered list.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &'a TransactionFilter,
) -> impl Iterator<Item = (usize, &'a Transaction)> + 'a {
    transactions
        .iter()
        .enumerate()
        .filter(move |(_, transaction)| filter.matches(transaction))
}
