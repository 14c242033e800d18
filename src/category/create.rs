//! The add-category form and endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HX_TRIGGER;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    app_state::lock,
    category::{AddCategoryOutcome, CategoryName, CategoryRegistry},
    endpoints, events,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, FormMessage,
    },
    transaction::TransactionType,
};

/// The state needed for adding a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryState {
    /// The income and expense categories.
    pub category_registry: Arc<Mutex<CategoryRegistry>>,
}

impl FromRef<AppState> for CreateCategoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            category_registry: state.category_registry.clone(),
        }
    }
}

/// The form data for adding a category.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryFormData {
    /// The list to add the category to.
    pub type_: TransactionType,
    /// The category name as typed by the user.
    pub name: String,
}

/// Handle the add-category form.
///
/// Responds with a fresh form carrying an inline message. A blank name is an
/// error and a duplicate is a warning; neither changes the registry. Only a
/// new category triggers the `categories-changed` event.
pub async fn create_category_endpoint(
    State(state): State<CreateCategoryState>,
    Form(form): Form<CategoryFormData>,
) -> Response {
    let name = match CategoryName::new(&form.name) {
        Ok(name) => name,
        Err(error) => {
            let message = error.to_string();
            return category_form_view(form.type_, Some(FormMessage::Error(&message)))
                .into_response();
        }
    };

    let outcome = match lock(&state.category_registry) {
        Ok(mut registry) => registry.add_category(form.type_, name.clone()),
        Err(error) => return error.into_alert_response(),
    };

    match outcome {
        AddCategoryOutcome::Added => {
            tracing::info!("Added {} category \"{name}\"", form.type_.as_form_value());
            let message = format!("Category '{name}' added");

            (
                [(HX_TRIGGER, events::CATEGORIES_CHANGED)],
                category_form_view(form.type_, Some(FormMessage::Success(&message))),
            )
                .into_response()
        }
        AddCategoryOutcome::AlreadyExists => {
            let message = format!("Category '{name}' already exists");

            category_form_view(form.type_, Some(FormMessage::Warning(&message))).into_response()
        }
    }
}

/// Render the add-category form with `selected_type` checked.
pub fn category_form_view(selected_type: TransactionType, message: Option<FormMessage<'_>>) -> Markup {
    let is_income = selected_type == TransactionType::Income;

    html! {
        form
            id="category-form"
            hx-post=(endpoints::CATEGORIES_API)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            fieldset class="space-y-2"
            {
                legend class=(FORM_LABEL_STYLE) { "Category type" }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    div class="flex items-center gap-3"
                    {
                        input
                            name="type_"
                            id="category-type-income"
                            type="radio"
                            value="income"
                            checked[is_income]
                            required
                            class=(FORM_RADIO_INPUT_STYLE);

                        label for="category-type-income" class=(FORM_RADIO_LABEL_STYLE)
                        {
                            "Income"
                        }
                    }

                    div class="flex items-center gap-3"
                    {
                        input
                            name="type_"
                            id="category-type-expense"
                            type="radio"
                            value="expense"
                            checked[!is_income]
                            required
                            class=(FORM_RADIO_INPUT_STYLE);

                        label for="category-type-expense" class=(FORM_RADIO_LABEL_STYLE)
                        {
                            "Expense"
                        }
                    }
                }
            }

            div
            {
                label for="category-name" class=(FORM_LABEL_STYLE) { "Category name" }

                input
                    id="category-name"
                    type="text"
                    name="name"
                    placeholder="e.g. Rent"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if let Some(message) = message {
                (message.into_html())
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Category" }
        }
    }
}
