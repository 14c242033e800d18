//! Core category domain types and the in-memory category registry.

use std::fmt::Display;

use crate::{Error, transaction::TransactionType};

/// The income categories every process starts with.
const DEFAULT_INCOME_CATEGORIES: [&str; 5] =
    ["Salary", "Allowance", "Loan", "Other", "Receivable"];

/// The expense categories every process starts with.
const DEFAULT_EXPENSE_CATEGORIES: [&str; 6] = [
    "Food",
    "Entertainment",
    "Transport",
    "Bills",
    "Other",
    "Payable",
];

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name from `name` with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is
    /// empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What happened when a category was added.
///
/// A duplicate is not an error: the registry is unchanged and the user is
/// warned instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddCategoryOutcome {
    /// The name was appended to the end of the list.
    Added,
    /// The list already had the name and was left unchanged.
    AlreadyExists,
}

/// The income and expense category lists.
///
/// The registry lives only in memory. A restart resets it to the defaults,
/// which leaves transactions that use a custom category untouched since a
/// transaction stores its category as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    income: Vec<CategoryName>,
    expense: Vec<CategoryName>,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        let to_names = |names: &[&str]| -> Vec<CategoryName> {
            names
                .iter()
                .map(|name| CategoryName::new_unchecked(name))
                .collect()
        };

        Self {
            income: to_names(&DEFAULT_INCOME_CATEGORIES),
            expense: to_names(&DEFAULT_EXPENSE_CATEGORIES),
        }
    }
}

impl CategoryRegistry {
    /// The categories for `kind` in the order they were added.
    pub fn categories(&self, kind: TransactionType) -> &[CategoryName] {
        match kind {
            TransactionType::Income => &self.income,
            TransactionType::Expense => &self.expense,
        }
    }

    /// Append `name` to the list for `kind` unless the list already has it.
    ///
    /// Names are compared exactly, so "food" and "Food" are different
    /// categories.
    pub fn add_category(&mut self, kind: TransactionType, name: CategoryName) -> AddCategoryOutcome {
        let categories = match kind {
            TransactionType::Income => &mut self.income,
            TransactionType::Expense => &mut self.expense,
        };

        if categories.contains(&name) {
            AddCategoryOutcome::AlreadyExists
        } else {
            categories.push(name);
            AddCategoryOutcome::Added
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        category::{AddCategoryOutcome, CategoryName, CategoryRegistry},
        transaction::TransactionType,
    };

    #[test]
    fn category_name_is_trimmed() {
        let name = CategoryName::new("  Gifts ").unwrap();

        assert_eq!(name.as_ref(), "Gifts");
    }

    #[test]
    fn category_name_fails_on_whitespace() {
        assert_eq!(CategoryName::new(""), Err(Error::EmptyCategoryName));
        assert_eq!(CategoryName::new(" \t "), Err(Error::EmptyCategoryName));
    }

    #[test]
    fn registry_starts_with_defaults() {
        let registry = CategoryRegistry::default();

        let income = registry
            .categories(TransactionType::Income)
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>();
        let expense = registry
            .categories(TransactionType::Expense)
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>();

        assert_eq!(
            income,
            ["Salary", "Allowance", "Loan", "Other", "Receivable"]
        );
        assert_eq!(
            expense,
            ["Food", "Entertainment", "Transport", "Bills", "Other", "Payable"]
        );
    }

    #[test]
    fn add_new_category_appends_to_end() {
        let mut registry = CategoryRegistry::default();
        let length_before = registry.categories(TransactionType::Expense).len();

        let outcome =
            registry.add_category(TransactionType::Expense, CategoryName::new_unchecked("Rent"));

        let expense = registry.categories(TransactionType::Expense);
        assert_eq!(outcome, AddCategoryOutcome::Added);
        assert_eq!(expense.len(), length_before + 1);
        assert_eq!(expense.last(), Some(&CategoryName::new_unchecked("Rent")));
    }

    #[test]
    fn add_duplicate_category_leaves_list_unchanged() {
        let mut registry = CategoryRegistry::default();
        let before = registry.clone();

        let outcome =
            registry.add_category(TransactionType::Income, CategoryName::new_unchecked("Salary"));

        assert_eq!(outcome, AddCategoryOutcome::AlreadyExists);
        assert_eq!(registry, before);
    }

    #[test]
    fn same_name_can_exist_in_both_lists() {
        let mut registry = CategoryRegistry::default();

        let outcome =
            registry.add_category(TransactionType::Income, CategoryName::new_unchecked("Food"));

        assert_eq!(outcome, AddCategoryOutcome::Added);
        assert!(
            registry
                .categories(TransactionType::Expense)
                .contains(&CategoryName::new_unchecked("Food"))
        );
    }
}
