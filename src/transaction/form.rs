use maud::{Markup, html};

use crate::{
    category::{CategoryName, category_options_view},
    endpoints, events,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, FormMessage, loading_spinner,
    },
    transaction::TransactionType,
};

/// The values to pre-fill the transaction form with.
pub struct TransactionFormDefaults<'a> {
    pub transaction_type: TransactionType,
    /// The categories for `transaction_type`.
    pub categories: &'a [CategoryName],
    pub category: Option<&'a str>,
    pub amount: Option<f64>,
    pub description: Option<&'a str>,
    pub message: Option<FormMessage<'a>>,
}

impl<'a> TransactionFormDefaults<'a> {
    /// An empty form for `transaction_type`.
    pub fn new(transaction_type: TransactionType, categories: &'a [CategoryName]) -> Self {
        Self {
            transaction_type,
            categories,
            category: None,
            amount: None,
            description: None,
            message: None,
        }
    }
}

pub fn transaction_form_view(defaults: &TransactionFormDefaults<'_>) -> Markup {
    let is_expense = matches!(defaults.transaction_type, TransactionType::Expense);
    let amount_str = defaults.amount.map(|amount| amount.to_string());
    let category_trigger = format!("{} from:body", events::CATEGORIES_CHANGED);

    html! {
        form
            id="transaction-form"
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-indicator="#indicator"
            class="w-full space-y-4"
        {
            fieldset class="space-y-2"
            {
                legend class=(FORM_LABEL_STYLE) { "Transaction type" }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    div class="flex items-center gap-3"
                    {
                        input
                            name="type_"
                            id="transaction-type-income"
                            type="radio"
                            value="income"
                            checked[!is_expense]
                            required
                            tabindex="0"
                            hx-get=(endpoints::CATEGORY_OPTIONS)
                            hx-target="#category"
                            class=(FORM_RADIO_INPUT_STYLE);

                        label
                            for="transaction-type-income"
                            class=(FORM_RADIO_LABEL_STYLE)
                        {
                            "Income"
                        }
                    }

                    div class="flex items-center gap-3"
                    {
                        input
                            name="type_"
                            id="transaction-type-expense"
                            type="radio"
                            value="expense"
                            checked[is_expense]
                            required
                            tabindex="0"
                            hx-get=(endpoints::CATEGORY_OPTIONS)
                            hx-target="#category"
                            class=(FORM_RADIO_INPUT_STYLE);

                        label
                            for="transaction-type-expense"
                            class=(FORM_RADIO_LABEL_STYLE)
                        {
                            "Expense"
                        }
                    }
                }
            }

            div
            {
                label
                    for="category"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category"
                }

                // Reloads its options when a category is added elsewhere on the page.
                select
                    name="category"
                    id="category"
                    required
                    hx-get=(endpoints::CATEGORY_OPTIONS)
                    hx-trigger=(category_trigger)
                    hx-include="#transaction-form [name='type_']"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    (category_options_view(defaults.categories, defaults.category))
                }
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="1000"
                        placeholder="0"
                        min="0"
                        required
                        value=[amount_str.as_deref()]
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label
                    for="description"
                    class=(FORM_LABEL_STYLE)
                {
                    "Description"
                }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="Description"
                    value=[defaults.description]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if let Some(message) = defaults.message {
                (message.into_html())
            }

            button type="submit" id="indicator" class=(BUTTON_PRIMARY_STYLE)
            {
                span class="htmx-indicator" { (loading_spinner()) }
                " Add Transaction"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::{TransactionFormDefaults, transaction_form_view};
    use crate::{
        category::CategoryRegistry,
        endpoints,
        html::FormMessage,
        test_utils::{
            assert_form_error_message, assert_form_input, assert_form_submit_button,
            assert_hx_endpoint, assert_valid_html, must_get_form,
        },
        transaction::TransactionType,
    };

    fn render(defaults: &TransactionFormDefaults<'_>) -> Html {
        Html::parse_fragment(&transaction_form_view(defaults).into_string())
    }

    #[test]
    fn transaction_form_has_required_fields() {
        let registry = CategoryRegistry::default();
        let categories = registry.categories(TransactionType::Income);

        let html = render(&TransactionFormDefaults::new(
            TransactionType::Income,
            categories,
        ));

        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::TRANSACTIONS_API, "hx-post");
        assert_form_input(&form, "type_", "radio");
        assert_form_input(&form, "amount", "number");
        assert_form_submit_button(&form);
    }

    #[test]
    fn transaction_form_checks_selected_type() {
        let registry = CategoryRegistry::default();
        let cases = [
            (TransactionType::Expense, "expense"),
            (TransactionType::Income, "income"),
        ];

        for (transaction_type, expected) in cases {
            let html = render(&TransactionFormDefaults::new(
                transaction_type,
                registry.categories(transaction_type),
            ));
            assert_checked_value(&html, expected);
        }
    }

    #[test]
    fn category_selector_is_scoped_to_type() {
        let registry = CategoryRegistry::default();

        let html = render(&TransactionFormDefaults::new(
            TransactionType::Expense,
            registry.categories(TransactionType::Expense),
        ));

        let options = html
            .select(&Selector::parse("select#category option").unwrap())
            .map(|option| option.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(
            options,
            ["Food", "Entertainment", "Transport", "Bills", "Other", "Payable"]
        );
    }

    #[test]
    fn keeps_submitted_values_and_shows_message() {
        let registry = CategoryRegistry::default();
        let defaults = TransactionFormDefaults {
            category: Some("Bills"),
            amount: Some(0.0),
            description: Some("electricity"),
            message: Some(FormMessage::Error("Amount must be greater than zero")),
            ..TransactionFormDefaults::new(
                TransactionType::Expense,
                registry.categories(TransactionType::Expense),
            )
        };

        let html = render(&defaults);

        let form = must_get_form(&html);
        assert_form_error_message(&form, "Amount must be greater than zero");
        let selected = html
            .select(&Selector::parse("option[selected]").unwrap())
            .next()
            .and_then(|option| option.value().attr("value"));
        assert_eq!(selected, Some("Bills"));
        let description = html
            .select(&Selector::parse("input[name=description]").unwrap())
            .next()
            .and_then(|input| input.value().attr("value"));
        assert_eq!(description, Some("electricity"));
    }

    #[track_caller]
    fn assert_checked_value(document: &Html, expected: &str) {
        let selector = Selector::parse("input[type=radio][name=type_]").unwrap();
        let inputs = document.select(&selector).collect::<Vec<_>>();
        assert_eq!(
            inputs.len(),
            2,
            "want 2 transaction type inputs, got {}",
            inputs.len()
        );

        let checked = inputs
            .iter()
            .find(|input| input.value().attr("checked").is_some())
            .and_then(|input| input.value().attr("value"));
        assert_eq!(
            checked,
            Some(expected),
            "want checked transaction type to be {expected}, got {checked:?}"
        );
    }
}
