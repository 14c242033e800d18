//! The filtered transaction table.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    app_state::lock,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, CATEGORY_BADGE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, format_amount,
    },
    transaction::{
        Transaction, TransactionFilter, TransactionStore, TransactionType, filter_transactions,
    },
};

/// The state needed to render the transaction list.
#[derive(Debug, Clone)]
pub struct TransactionListState {
    pub transaction_store: Arc<Mutex<TransactionStore>>,
    pub display_unit: String,
}

impl FromRef<AppState> for TransactionListState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
            display_unit: state.display_unit.clone(),
        }
    }
}

/// A route handler for the transaction list partial, filtered by the query string.
pub async fn get_transaction_list(
    State(state): State<TransactionListState>,
    Query(filter): Query<TransactionFilter>,
) -> Response {
    let store = match lock(&state.transaction_store) {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    transaction_list_view(store.transactions(), &filter, &state.display_unit).into_response()
}

/// Render the transactions that pass `filter` in store order.
///
/// Rows are numbered by their position in the unfiltered list.
pub fn transaction_list_view(
    transactions: &[Transaction],
    filter: &TransactionFilter,
    display_unit: &str,
) -> Markup {
    let rows = filter_transactions(transactions, filter).collect::<Vec<_>>();

    if rows.is_empty() {
        return html! {
            p class="text-gray-500 dark:text-gray-400" role="status"
            {
                "No transactions match the current filter."
            }
        };
    }

    let table_row = |index: usize, transaction: &Transaction| {
        let delete_url = format_endpoint(endpoints::TRANSACTION, transaction.id);
        let amount_style = match transaction.type_ {
            TransactionType::Income => "px-6 py-4 text-right text-green-700 dark:text-green-400",
            TransactionType::Expense => "px-6 py-4 text-right text-red-700 dark:text-red-400",
        };
        let confirm_message = format!(
            "Are you sure you want to delete this {} transaction of {}? This cannot be undone.",
            transaction.category,
            format_amount(transaction.amount, display_unit)
        );

        html!(
            tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
            {
                td class=(TABLE_CELL_STYLE) { (index + 1) }

                td class=(TABLE_CELL_STYLE) { (transaction.type_) }

                td class=(TABLE_CELL_STYLE)
                {
                    span class=(CATEGORY_BADGE_STYLE) { (transaction.category) }
                }

                td class=(amount_style)
                {
                    (format_amount(transaction.amount, display_unit))
                }

                td class=(TABLE_CELL_STYLE) { (transaction.description) }

                td class=(TABLE_CELL_STYLE)
                {
                    button
                        hx-delete=(delete_url)
                        hx-confirm=(confirm_message)
                        hx-target="#alert-container"
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        )
    };

    html! {
        div class="w-full overflow-x-auto"
        {
            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "#" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class="px-6 py-3 text-right" { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                    }
                }

                tbody
                {
                    @for (index, transaction) in rows {
                        (table_row(index, transaction))
                    }
                }
            }
        }
    }
}
