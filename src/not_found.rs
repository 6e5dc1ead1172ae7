//! Defines the page to display when no route matches the request.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// The fallback route handler, renders the 404 page.
pub async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(
            error_view(
                "Not Found",
                "404",
                "Something's missing.",
                "Sorry, we can't find that page. You'll find lots to explore on the home page.",
            )
            .into_string(),
        ),
    )
        .into_response()
}
