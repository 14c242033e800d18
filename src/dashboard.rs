//! The ledger page.
//!
//! The page is rendered in full once. After that, htmx keeps it current: the
//! list and report containers re-fetch their partials whenever the server
//! announces a change with an `HX-Trigger` event, and the filter form
//! re-fetches the list as the user types.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    app_state::lock,
    category::{CategoryRegistry, category_form_view},
    endpoints, events,
    html::{CARD_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base},
    report::{build_report, report_view},
    transaction::{
        TransactionFilter, TransactionFormDefaults, TransactionStore, TransactionType, TypeFilter,
        transaction_form_view, transaction_list_view,
    },
};

/// The state needed for displaying the ledger page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub transaction_store: Arc<Mutex<TransactionStore>>,
    pub category_registry: Arc<Mutex<CategoryRegistry>>,
    pub display_unit: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
            category_registry: state.category_registry.clone(),
            display_unit: state.display_unit.clone(),
        }
    }
}

/// Display the ledger page, with the transaction list filtered by the query string.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(filter): Query<TransactionFilter>,
) -> Response {
    let registry = match lock(&state.category_registry) {
        Ok(registry) => registry.clone(),
        Err(error) => return error.into_response(),
    };

    let store = match lock(&state.transaction_store) {
        Ok(store) => store,
        Err(error) => return error.into_response(),
    };

    let transaction_list = transaction_list_view(store.transactions(), &filter, &state.display_unit);
    let report = report_view(
        &build_report(store.transactions(), &registry),
        &state.display_unit,
    );
    drop(store);

    let transaction_form = transaction_form_view(&TransactionFormDefaults::new(
        TransactionType::Income,
        registry.categories(TransactionType::Income),
    ));

    dashboard_view(&filter, &transaction_form, &transaction_list, &report).into_response()
}

fn dashboard_view(
    filter: &TransactionFilter,
    transaction_form: &Markup,
    transaction_list: &Markup,
    report: &Markup,
) -> Markup {
    let transactions_changed = format!("{} from:body", events::TRANSACTIONS_CHANGED);
    let report_trigger = format!(
        "{} from:body, {} from:body",
        events::TRANSACTIONS_CHANGED,
        events::CATEGORIES_CHANGED
    );

    let content = html! {
        div class="flex flex-col lg:flex-row gap-6 px-6 py-8 text-gray-900 dark:text-white"
        {
            aside class="w-full lg:w-80 lg:shrink-0 space-y-6"
            {
                section class=(CARD_STYLE)
                {
                    h2 class="text-lg font-bold" { "Add Category" }
                    (category_form_view(TransactionType::Income, None))
                }

                section class=(CARD_STYLE)
                {
                    h2 class="text-lg font-bold" { "Filter" }
                    (filter_form_view(filter))
                }
            }

            main class="w-full space-y-6"
            {
                h1 class="text-2xl font-bold" { "Pocket Ledger" }

                section class=(CARD_STYLE)
                {
                    h2 class="text-lg font-bold" { "New Transaction" }
                    (transaction_form)
                }

                section class=(CARD_STYLE)
                {
                    h2 class="text-lg font-bold" { "Transactions" }

                    div
                        id="transaction-list"
                        hx-get=(endpoints::TRANSACTIONS_PARTIAL)
                        hx-trigger=(transactions_changed)
                        hx-include="#filter-form"
                    {
                        (transaction_list)
                    }
                }

                section class=(CARD_STYLE)
                {
                    h2 class="text-lg font-bold" { "Report" }

                    div
                        id="report"
                        class="space-y-4"
                        hx-get=(endpoints::REPORT_PARTIAL)
                        hx-trigger=(report_trigger)
                    {
                        (report)
                    }
                }
            }
        }
    };

    base("Ledger", &content)
}

/// The filter controls. Without JavaScript the form still works as a plain GET
/// of the page.
fn filter_form_view(filter: &TransactionFilter) -> Markup {
    let type_options = [
        (TypeFilter::All, "all", "All"),
        (TypeFilter::Income, "income", "Income"),
        (TypeFilter::Expense, "expense", "Expense"),
    ];

    html! {
        form
            id="filter-form"
            action=(endpoints::ROOT)
            method="get"
            hx-get=(endpoints::TRANSACTIONS_PARTIAL)
            hx-target="#transaction-list"
            hx-trigger="change, input changed delay:300ms, submit"
            class="w-full space-y-4"
        {
            div
            {
                label for="filter-type" class=(FORM_LABEL_STYLE) { "Type" }

                select id="filter-type" name="type_" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for (type_filter, value, label) in type_options {
                        option value=(value) selected[filter.type_ == type_filter] { (label) }
                    }
                }
            }

            div
            {
                label for="filter-category" class=(FORM_LABEL_STYLE) { "Category contains" }

                input
                    id="filter-category"
                    name="category"
                    type="search"
                    value=(filter.category)
                    placeholder="e.g. Food"
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }
    }
}
