//! Names of the htmx events sent in the `HX-Trigger` response header.
//!
//! Partials that depend on the changed state listen for these events on
//! `body` and fetch a fresh copy of themselves.

/// Sent after a transaction is added or deleted.
pub const TRANSACTIONS_CHANGED: &str = "transactions-changed";
/// Sent after a category is added.
pub const CATEGORIES_CHANGED: &str = "categories-changed";
