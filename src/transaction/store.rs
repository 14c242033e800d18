//! The transaction store: the full list of transactions held in memory and
//! mirrored to a single JSON file.
//!
//! The file is read once by [TransactionStore::load] and overwritten in full
//! after every change. There is no incremental write path, no atomic rename,
//! and no locking between processes, so the last writer wins.

use std::{fs, path::PathBuf};

use crate::{
    Error,
    transaction::{Transaction, TransactionId},
};

/// The in-memory list of transactions and the file it is persisted to.
#[derive(Debug)]
pub struct TransactionStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Load the transactions saved at `path`.
    ///
    /// A missing file is not an error, the store simply starts empty.
    ///
    /// # Errors
    /// Returns an [Error::LoadFailed] if the file exists but cannot be read or
    /// does not contain a JSON array of transactions.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();

        if !path.exists() {
            tracing::info!(
                "No transaction file at {}, starting with an empty ledger",
                path.display()
            );
            return Ok(Self {
                path,
                transactions: Vec::new(),
            });
        }

        let load_error = |error: &dyn std::fmt::Display| {
            Error::LoadFailed(path.display().to_string(), error.to_string())
        };

        let text = fs::read_to_string(&path).map_err(|error| load_error(&error))?;
        let transactions: Vec<Transaction> =
            serde_json::from_str(&text).map_err(|error| load_error(&error))?;

        tracing::debug!(
            "Loaded {} transactions from {}",
            transactions.len(),
            path.display()
        );

        Ok(Self { path, transactions })
    }

    /// All transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Serialize every transaction and overwrite the file.
    ///
    /// # Errors
    /// Returns an [Error::PersistenceFailed] if the transactions cannot be
    /// serialized or the file cannot be written.
    pub fn save_all(&self) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(&self.transactions)
            .map_err(|error| Error::PersistenceFailed(error.to_string()))?;

        fs::write(&self.path, json).map_err(|error| {
            Error::PersistenceFailed(format!("could not write {}: {error}", self.path.display()))
        })
    }

    /// Add `transaction` to the end of the list and save the whole list.
    ///
    /// # Errors
    /// Returns an [Error::PersistenceFailed] if the list could not be saved.
    /// The transaction stays in memory either way.
    pub fn append(&mut self, transaction: Transaction) -> Result<(), Error> {
        self.transactions.push(transaction);
        self.save_all()
    }

    /// Remove the transaction with the ID `id` and save the whole list.
    ///
    /// Returns the removed transaction.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DeleteMissingTransaction] if no transaction has the ID `id`,
    ///   in which case nothing is written,
    /// - or [Error::PersistenceFailed] if the list could not be saved. The
    ///   transaction stays removed from memory.
    pub fn remove(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(Error::DeleteMissingTransaction)?;

        let removed = self.transactions.remove(index);
        self.save_all()?;

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use uuid::Uuid;

    use crate::{
        Error,
        test_utils::TempDataFile,
        transaction::{Transaction, TransactionStore, TransactionType},
    };

    fn salary() -> Transaction {
        Transaction::build(TransactionType::Income, "Salary", 5_000_000.0)
            .description("monthly")
            .finalise()
            .unwrap()
    }

    fn lunch() -> Transaction {
        Transaction::build(TransactionType::Expense, "Food", 200_000.0)
            .description("lunch")
            .finalise()
            .unwrap()
    }

    #[test]
    fn load_missing_file_is_empty() {
        let file = TempDataFile::new();

        let store = TransactionStore::load(file.path()).expect("Could not load store");

        assert!(store.is_empty());
        assert!(!file.path().exists(), "loading should not create the file");
    }

    #[test]
    fn append_round_trips_through_file() {
        let file = TempDataFile::new();
        let mut store = TransactionStore::load(file.path()).unwrap();
        let want = vec![salary(), lunch()];

        for transaction in want.clone() {
            store.append(transaction).expect("Could not append transaction");
        }

        let reloaded = TransactionStore::load(file.path()).expect("Could not reload store");
        assert_eq!(reloaded.transactions(), want.as_slice());
    }

    #[test]
    fn append_increases_length_by_one() {
        let file = TempDataFile::new();
        let mut store = TransactionStore::load(file.path()).unwrap();
        store.append(salary()).unwrap();
        let length_before = store.len();

        store.append(lunch()).unwrap();

        assert_eq!(store.len(), length_before + 1);
    }

    #[test]
    fn remove_deletes_only_the_target() {
        let file = TempDataFile::new();
        let mut store = TransactionStore::load(file.path()).unwrap();
        let first = salary();
        let second = lunch();
        let third = salary();
        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();
        store.append(third.clone()).unwrap();

        let removed = store.remove(second.id).expect("Could not remove transaction");

        assert_eq!(removed, second);
        let reloaded = TransactionStore::load(file.path()).unwrap();
        assert_eq!(reloaded.transactions(), [first, third].as_slice());
    }

    #[test]
    fn remove_missing_id_does_not_write() {
        let file = TempDataFile::new();
        let mut store = TransactionStore::load(file.path()).unwrap();

        let result = store.remove(Uuid::new_v4());

        assert_eq!(result, Err(Error::DeleteMissingTransaction));
        assert!(!file.path().exists());
    }

    #[test]
    fn load_fails_on_malformed_file() {
        let file = TempDataFile::new();
        fs::write(file.path(), "{ not json").unwrap();

        let result = TransactionStore::load(file.path());

        assert!(
            matches!(result, Err(Error::LoadFailed(_, _))),
            "want load failure, got {result:?}"
        );
    }

    #[test]
    fn load_accepts_localized_file_and_assigns_ids() {
        let file = TempDataFile::new();
        let legacy = "[{\"نوع\": \"درآمد\", \"دسته\u{200c}بندی\": \"حقوق\", \"مبلغ\": 5000000.0, \"توضیح\": \"\"}, \
             {\"نوع\": \"هزینه\", \"دسته\u{200c}بندی\": \"خوراکی\", \"مبلغ\": 200000.0, \"توضیح\": \"\"}]";
        fs::write(file.path(), legacy).unwrap();

        let store = TransactionStore::load(file.path()).expect("Could not load legacy file");

        let transactions = store.transactions();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].type_, TransactionType::Income);
        assert_eq!(transactions[1].type_, TransactionType::Expense);
        assert_ne!(transactions[0].id, transactions[1].id);
    }

    #[test]
    fn failed_save_keeps_in_memory_change() {
        let file = TempDataFile::new();
        // A directory cannot be overwritten as a file, so every save fails.
        fs::create_dir(file.path()).unwrap();
        let mut store = TransactionStore {
            path: file.path().to_owned(),
            transactions: Vec::new(),
        };

        let result = store.append(salary());

        assert!(
            matches!(result, Err(Error::PersistenceFailed(_))),
            "want persistence failure, got {result:?}"
        );
        assert_eq!(store.len(), 1);
    }
}
