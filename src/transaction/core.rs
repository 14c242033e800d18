//! Defines the core data models for transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// The stable identifier of a transaction.
///
/// Deletion targets this ID rather than the transaction's position, so a
/// page rendered before the list changed still deletes the right record.
pub type TransactionId = Uuid;

/// Whether money was earned or spent.
///
/// Serialized in lowercase. The capitalized and localized labels written by
/// older versions of the data file are accepted when loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned, e.g. a salary.
    #[serde(alias = "Income", alias = "درآمد")]
    Income,
    /// Money spent, e.g. groceries.
    #[serde(alias = "Expense", alias = "هزینه")]
    Expense,
}

impl TransactionType {
    /// The value used for this type in forms and query strings.
    pub fn as_form_value(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "Income"),
            TransactionType::Expense => write!(f, "Expense"),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction. Records without one get a fresh ID on load.
    #[serde(default = "Uuid::new_v4")]
    pub id: TransactionId,
    /// Whether this transaction is income or an expense.
    #[serde(rename = "type", alias = "نوع")]
    pub type_: TransactionType,
    /// The category label, e.g. "Salary" or "Food".
    ///
    /// This is free text. It does not have to match a category in the
    /// current registry.
    #[serde(alias = "دسته\u{200c}بندی")]
    pub category: String,
    /// The amount of money earned or spent. Always greater than zero for
    /// transactions created through [TransactionBuilder::finalise].
    #[serde(alias = "مبلغ")]
    pub amount: f64,
    /// A text description of what the transaction was for.
    #[serde(default, alias = "توضیح")]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(type_: TransactionType, category: &str, amount: f64) -> TransactionBuilder {
        TransactionBuilder {
            type_,
            category: category.to_owned(),
            amount,
            description: String::new(),
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// Call [TransactionBuilder::finalise] to validate the fields and assign the
/// transaction a new ID.
///
/// # Examples
///
/// ```ignore
/// use crate::transaction::{Transaction, TransactionType};
///
/// let transaction = Transaction::build(TransactionType::Expense, "Food", 200_000.0)
///     .description("lunch")
///     .finalise()
///     .unwrap();
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// Whether the transaction is income or an expense.
    pub type_: TransactionType,

    /// The category label. Surrounding whitespace is removed when finalised.
    pub category: String,

    /// The amount of money earned or spent.
    ///
    /// Must be a finite number greater than zero. The sign never encodes the
    /// direction of the transaction, [TransactionBuilder::type_] does.
    pub amount: f64,

    /// A human-readable description of the transaction, may be empty.
    pub description: String,
}

impl TransactionBuilder {
    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    /// Validate the fields and create the [Transaction].
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidAmount] if the amount is zero, negative or not finite,
    /// - or [Error::EmptyCategory] if the category is empty after trimming.
    pub fn finalise(self) -> Result<Transaction, Error> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::InvalidAmount);
        }

        let category = self.category.trim();

        if category.is_empty() {
            return Err(Error::EmptyCategory);
        }

        Ok(Transaction {
            id: Uuid::new_v4(),
            type_: self.type_,
            category: category.to_owned(),
            amount: self.amount,
            description: self.description,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
