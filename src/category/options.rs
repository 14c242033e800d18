//! The `<option>` list for the transaction form's category selector.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    app_state::lock,
    category::{CategoryName, CategoryRegistry},
    transaction::TransactionType,
};

/// The state needed to list the categories for a transaction type.
#[derive(Debug, Clone)]
pub struct CategoryOptionsState {
    /// The income and expense categories.
    pub category_registry: Arc<Mutex<CategoryRegistry>>,
}

impl FromRef<AppState> for CategoryOptionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            category_registry: state.category_registry.clone(),
        }
    }
}

/// The transaction type to list categories for.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryOptionsQuery {
    /// Either "income" or "expense".
    pub type_: TransactionType,
}

/// A route handler that returns the category options for a transaction type.
pub async fn get_category_options(
    State(state): State<CategoryOptionsState>,
    Query(query): Query<CategoryOptionsQuery>,
) -> Response {
    let registry = match lock(&state.category_registry) {
        Ok(registry) => registry,
        Err(error) => return error.into_alert_response(),
    };

    category_options_view(registry.categories(query.type_), None).into_response()
}

/// Render one `<option>` per category, selecting `selected` if it is listed.
pub fn category_options_view(categories: &[CategoryName], selected: Option<&str>) -> Markup {
    html! {
        @for category in categories {
            option
                value=(category)
                selected[selected == Some(category.as_ref())]
            {
                (category)
            }
        }
    }
}
