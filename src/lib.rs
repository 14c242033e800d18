//! Pocket Ledger is a web app for tracking personal income and expenses.
//!
//! This library serves server-rendered HTML pages and htmx partials for
//! recording transactions, managing categories, and reporting totals. All
//! transactions are kept in memory and written to a single JSON file after
//! every change.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod category;
mod dashboard;
mod endpoints;
mod error;
mod events;
mod html;
mod internal_server_error;
mod not_found;
mod report;
mod routing;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{AddCategoryOutcome, CategoryName, CategoryRegistry};
pub use error::Error;
pub use report::{CategoryTotal, Report, Totals, build_report};
pub use routing::build_router;
pub use transaction::{
    Transaction, TransactionBuilder, TransactionFilter, TransactionId, TransactionStore,
    TransactionType, TypeFilter, filter_transactions,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
