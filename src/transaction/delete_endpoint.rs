use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HX_TRIGGER;

use crate::{
    AppState, Error,
    alert::Alert,
    app_state::lock,
    events,
    transaction::{TransactionId, TransactionStore},
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The store to remove the transaction from.
    transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// A route handler for deleting a transaction, responds with an alert.
///
/// On success the `transactions-changed` event is triggered so the list and
/// report are rendered again from the updated store. A failed write still
/// triggers the event because the transaction is gone from memory.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let result = lock(&state.transaction_store).and_then(|mut store| store.remove(transaction_id));

    match result {
        Ok(removed) => {
            tracing::info!(
                "Deleted {} transaction {transaction_id}",
                removed.type_.as_form_value()
            );

            (
                [(HX_TRIGGER, events::TRANSACTIONS_CHANGED)],
                Alert::SuccessSimple {
                    message: "Transaction deleted".to_owned(),
                },
            )
                .into_response()
        }
        Err(error @ Error::PersistenceFailed(_)) => {
            tracing::error!("Deleted transaction {transaction_id} but could not save: {error}");

            (
                [(HX_TRIGGER, events::TRANSACTIONS_CHANGED)],
                error.into_alert_response(),
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}
