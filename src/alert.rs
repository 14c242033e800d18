//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered as HTML fragments that htmx swaps into the
//! `#alert-container` element defined in [crate::html::base].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

const ALERT_SUCCESS_STYLE: &str = "p-4 mb-4 text-sm text-green-800 rounded-lg \
    bg-green-50 dark:bg-gray-800 dark:text-green-400 shadow";
const ALERT_ERROR_STYLE: &str = "p-4 mb-4 text-sm text-red-800 rounded-lg \
    bg-red-50 dark:bg-gray-800 dark:text-red-400 shadow";

/// A dismissable message shown in the alert container.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// A success message without details.
    SuccessSimple { message: String },
    /// An error message with extra details.
    Error { message: String, details: String },
    /// An error message without details.
    ErrorSimple { message: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (style, message, details) = match self {
            Alert::SuccessSimple { message } => (ALERT_SUCCESS_STYLE, message, None),
            Alert::Error { message, details } => (ALERT_ERROR_STYLE, message, Some(details)),
            Alert::ErrorSimple { message } => (ALERT_ERROR_STYLE, message, None),
        };

        html! {
            div
                class=(style)
                role="alert"
                onclick="this.remove()"
            {
                p class="font-semibold" { (message) }

                @if let Some(details) = details {
                    p { (details) }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn error_alert_renders_message_then_details() {
        let markup = Alert::Error {
            message: "Could not delete transaction".to_owned(),
            details: "Try again".to_owned(),
        }
        .into_html();

        let html = Html::parse_fragment(&markup.into_string());
        let paragraphs = html
            .select(&Selector::parse("p").unwrap())
            .map(|p| p.text().collect::<String>())
            .collect::<Vec<_>>();

        assert_eq!(paragraphs, ["Could not delete transaction", "Try again"]);
    }

    #[test]
    fn simple_alert_has_no_details() {
        let markup = Alert::ErrorSimple {
            message: "Nope".to_owned(),
        }
        .into_html();

        let html = Html::parse_fragment(&markup.into_string());
        let count = html.select(&Selector::parse("p").unwrap()).count();

        assert_eq!(count, 1);
    }
}
