//! Defines the app level error type and its conversion to HTTP responses.
use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;

use crate::{html::error_view, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A form field that should hold a number could not be parsed as one.
    ///
    /// Holds the text the client submitted.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The requested transaction was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the transaction has not been deleted.
    #[error("the requested transaction could not be found")]
    NotFound,

    /// Could not acquire the lock for the transaction store.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,
}

/// The JSON body sent when a transaction could not be found.
#[derive(Debug, Serialize)]
struct MessageBody {
    message: &'static str,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageBody {
                    message: "Transaction not found",
                }),
            )
                .into_response(),
            Error::InvalidAmount(input) => {
                tracing::debug!("Rejected invalid amount {input:?}");

                (
                    StatusCode::BAD_REQUEST,
                    Html(
                        error_view(
                            "Bad Request",
                            "400",
                            "Invalid amount",
                            &format!(
                                "\"{input}\" is not a number. \
                                Go back and enter an amount such as 12.34 or -5."
                            ),
                        )
                        .into_string(),
                    ),
                )
                    .into_response()
            }
            Error::StoreLockError => InternalServerError::default().into_response(),
        }
    }
}
