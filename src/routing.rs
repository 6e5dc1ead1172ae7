//! Application router configuration.

use axum::{
    Router,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    AppState,
    balance::get_balance,
    endpoints,
    not_found::get_404_not_found,
    search::{get_search_page, search_transactions_endpoint},
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_create_transaction_page, get_edit_transaction_page, get_transactions_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_transactions_page))
        .route(
            endpoints::ADD_TRANSACTION,
            get(get_create_transaction_page).post(create_transaction_endpoint),
        )
        .route(
            endpoints::EDIT_TRANSACTION,
            get(get_edit_transaction_page).post(edit_transaction_endpoint),
        )
        .route(
            endpoints::DELETE_TRANSACTION,
            get(delete_transaction_endpoint),
        )
        .route(
            endpoints::SEARCH,
            get(get_search_page).post(search_transactions_endpoint),
        )
        .route(endpoints::BALANCE, get(get_balance))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Get a response that redirects the client to the transactions page with a 302 Found.
pub(crate) fn redirect_to_transactions_page() -> Response {
    (StatusCode::FOUND, [(LOCATION, endpoints::ROOT)]).into_response()
}
