//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HX_TRIGGER;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    app_state::lock,
    category::CategoryRegistry,
    events,
    html::FormMessage,
    transaction::{
        Transaction, TransactionStore, TransactionType,
        form::{TransactionFormDefaults, transaction_form_view},
    },
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The store the new transaction is appended to.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
    /// The categories offered by the re-rendered form.
    pub category_registry: Arc<Mutex<CategoryRegistry>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
            category_registry: state.category_registry.clone(),
        }
    }
}

/// The form data for creating a transaction.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionForm {
    /// Whether the transaction is income or an expense.
    pub type_: TransactionType,
    /// The category selected for the transaction.
    pub category: String,
    /// The amount earned or spent.
    pub amount: f64,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
}

/// A route handler for creating a new transaction.
///
/// Responds with the transaction form. On success the form is cleared and the
/// `transactions-changed` event is triggered so the list and report refresh.
/// A rejected form keeps the submitted values and shows the reason inline.
///
/// If the transaction was added but the file could not be written, the form
/// is still cleared and the event still triggered, with the write failure
/// shown inline. Resubmitting would otherwise record the transaction twice.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let categories = match lock(&state.category_registry) {
        Ok(registry) => registry.categories(form.type_).to_vec(),
        Err(error) => return error.into_alert_response(),
    };

    let transaction = Transaction::build(form.type_, &form.category, form.amount)
        .description(&form.description)
        .finalise();

    let transaction = match transaction {
        Ok(transaction) => transaction,
        Err(error) => {
            let message = error.to_string();
            let defaults = TransactionFormDefaults {
                category: Some(&form.category),
                amount: Some(form.amount),
                description: Some(&form.description),
                message: Some(FormMessage::Error(&message)),
                ..TransactionFormDefaults::new(form.type_, &categories)
            };

            return transaction_form_view(&defaults).into_response();
        }
    };

    let result = lock(&state.transaction_store).and_then(|mut store| {
        tracing::debug!("Appending transaction {}", transaction.id);
        store.append(transaction)
    });

    let message = match result {
        Ok(()) => FormMessage::Success("Transaction recorded"),
        Err(error @ Error::PersistenceFailed(_)) => {
            tracing::error!("Recorded transaction but could not save it: {error}");
            FormMessage::Error("Transaction recorded but could not be saved to disk")
        }
        Err(error) => {
            tracing::error!("could not create transaction: {error}");
            return error.into_alert_response();
        }
    };

    let defaults = TransactionFormDefaults {
        message: Some(message),
        ..TransactionFormDefaults::new(form.type_, &categories)
    };

    (
        [(HX_TRIGGER, events::TRANSACTIONS_CHANGED)],
        transaction_form_view(&defaults),
    )
        .into_response()
}
