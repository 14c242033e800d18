//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty or whitespace-only string was used to create a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// A transaction was submitted without a category.
    #[error("Category cannot be empty")]
    EmptyCategory,

    /// A transaction was submitted with an amount of zero, a negative amount,
    /// or a value that is not a finite number.
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    /// The transaction file could not be read or parsed at startup.
    ///
    /// Callers should pass in the path and the original error as strings.
    #[error("could not load transactions from \"{0}\": {1}")]
    LoadFailed(String, String),

    /// The transaction list could not be written to disk.
    ///
    /// The in-memory change that preceded the write is kept, so the page and
    /// the file disagree until the next successful write.
    #[error("persistence failed: {0}")]
    PersistenceFailed(String),

    /// Could not acquire the lock on the shared application state.
    #[error("could not acquire the application state lock")]
    StateLockError,

    /// Tried to delete a transaction that does not exist.
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::PersistenceFailed(_) => InternalServerError {
                description: "Persistence Failed",
                fix: "Your change could not be saved to disk. Check the server logs and the \
                    permissions of the data file.",
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert fragment for htmx to swap into the alert container.
    pub(crate) fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::PersistenceFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Persistence failed".to_owned(),
                    details: "The change was applied but could not be saved to disk. \
                        It will be lost when the server restarts unless a later change is saved."
                        .to_owned(),
                },
            ),
            Error::DeleteMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not delete transaction".to_owned(),
                    details: "The transaction could not be found. \
                        Try refreshing the page to see if the transaction has already been deleted."
                        .to_owned(),
                },
            ),
            error @ (Error::EmptyCategoryName | Error::EmptyCategory | Error::InvalidAmount) => (
                StatusCode::BAD_REQUEST,
                Alert::ErrorSimple {
                    message: error.to_string(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details: "An unexpected error occurred, check the server logs for more details."
                        .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
