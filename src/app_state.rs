//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, category::CategoryRegistry, transaction::TransactionStore};

/// The state of the web server.
///
/// Route handlers do not take the whole state. Each handler declares a smaller
/// state struct that implements `FromRef<AppState>` and clones only the parts
/// it needs.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transactions loaded from disk, written back after every change.
    pub transaction_store: Arc<Mutex<TransactionStore>>,

    /// The income and expense categories for this process.
    pub category_registry: Arc<Mutex<CategoryRegistry>>,

    /// The unit displayed after every amount, e.g. "Toman".
    pub display_unit: String,
}

impl AppState {
    /// Create a new [AppState] from a loaded transaction store.
    ///
    /// The category registry always starts from the default categories.
    pub fn new(transaction_store: TransactionStore, display_unit: &str) -> Self {
        Self {
            transaction_store: Arc::new(Mutex::new(transaction_store)),
            category_registry: Arc::new(Mutex::new(CategoryRegistry::default())),
            display_unit: display_unit.to_owned(),
        }
    }
}

/// Lock `mutex`, logging and converting a poisoned lock into [Error::StateLockError].
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, Error> {
    mutex
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire state lock: {error}"))
        .map_err(|_| Error::StateLockError)
}
