//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The `TransactionStore` that keeps transactions in memory and on disk
//! - Filtering, and the handlers for the transaction form, list and deletion

mod core;
mod create_endpoint;
mod delete_endpoint;
mod filter;
mod form;
mod list;
mod store;

pub use core::{Transaction, TransactionBuilder, TransactionId, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use filter::{TransactionFilter, TypeFilter, filter_transactions};
pub use form::{TransactionFormDefaults, transaction_form_view};
pub use list::{get_transaction_list, transaction_list_view};
pub use store::TransactionStore;
