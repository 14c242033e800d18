use std::{
    env, fs,
    path::{Path, PathBuf},
};

use uuid::Uuid;

use crate::{AppState, TransactionStore};

/// A path in the system temp directory for a test's data file.
///
/// The file is not created. Whatever ends up at the path is removed when the
/// value is dropped.
pub(crate) struct TempDataFile {
    path: PathBuf,
}

impl TempDataFile {
    pub(crate) fn new() -> Self {
        let path = env::temp_dir().join(format!("pocket-ledger-test-{}.json", Uuid::new_v4()));

        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDataFile {
    fn drop(&mut self) {
        if self.path.is_dir() {
            let _ = fs::remove_dir_all(&self.path);
        } else {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Create an app state backed by `file` with the default categories.
#[track_caller]
pub(crate) fn test_state(file: &TempDataFile) -> AppState {
    let store = TransactionStore::load(file.path()).expect("Could not load test store");

    AppState::new(store, "Toman")
}
