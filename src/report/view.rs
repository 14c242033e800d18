use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    app_state::lock,
    category::CategoryRegistry,
    html::{CATEGORY_BADGE_STYLE, format_amount},
    report::{CategoryTotal, Report, build_report},
    transaction::TransactionStore,
};

/// The state needed to render the report.
#[derive(Debug, Clone)]
pub struct ReportState {
    pub transaction_store: Arc<Mutex<TransactionStore>>,
    pub category_registry: Arc<Mutex<CategoryRegistry>>,
    pub display_unit: String,
}

impl FromRef<AppState> for ReportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
            category_registry: state.category_registry.clone(),
            display_unit: state.display_unit.clone(),
        }
    }
}

/// A route handler for the report partial.
pub async fn get_report(State(state): State<ReportState>) -> Response {
    // The registry lock is released before the store is locked.
    let registry = match lock(&state.category_registry) {
        Ok(registry) => registry.clone(),
        Err(error) => return error.into_alert_response(),
    };

    let report = match lock(&state.transaction_store) {
        Ok(store) => build_report(store.transactions(), &registry),
        Err(error) => return error.into_alert_response(),
    };

    report_view(&report, &state.display_unit).into_response()
}

/// Render the three summary lines followed by the income and expense breakdowns.
pub fn report_view(report: &Report, display_unit: &str) -> Markup {
    let totals = &report.totals;
    let balance = totals.balance();
    let balance_style = if balance < 0.0 {
        "font-semibold text-red-700 dark:text-red-400"
    } else {
        "font-semibold text-green-700 dark:text-green-400"
    };

    html! {
        dl class="grid grid-cols-2 gap-2 text-sm" id="report-totals"
        {
            dt { "Total income" }
            dd class="text-right" data-total="income" { (format_amount(totals.income, display_unit)) }

            dt { "Total expenses" }
            dd class="text-right" data-total="expense" { (format_amount(totals.expense, display_unit)) }

            dt class="font-semibold" { "Balance" }
            dd class={ "text-right " (balance_style) } data-total="balance"
            {
                (format_amount(balance, display_unit))
            }
        }

        (breakdown_view("Income by category", "income", &report.income_breakdown, display_unit))
        (breakdown_view("Expenses by category", "expense", &report.expense_breakdown, display_unit))
    }
}

fn breakdown_view(
    title: &str,
    kind: &str,
    breakdown: &[CategoryTotal],
    display_unit: &str,
) -> Markup {
    html! {
        section class="space-y-2" data-breakdown=(kind)
        {
            h3 class="text-base font-semibold" { (title) }

            @if breakdown.is_empty() {
                p class="text-sm text-gray-500 dark:text-gray-400" { "Nothing recorded yet." }
            } @else {
                ul class="space-y-1 text-sm"
                {
                    @for category_total in breakdown {
                        li class="flex justify-between"
                        {
                            span class=(CATEGORY_BADGE_STYLE) { (category_total.category) }
                            span { (format_amount(category_total.total, display_unit)) }
                        }
                    }
                }
            }
        }
    }
}
