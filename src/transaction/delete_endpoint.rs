//! Defines the route handler that deletes a transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{Error, app_state::TransactionState, routing::redirect_to_transactions_page};

use super::TransactionId;

/// A route handler for deleting a transaction, redirects to the transactions page.
///
/// Deleting a transaction that does not exist changes nothing and still redirects.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    if state.lock_store()?.remove(transaction_id) {
        tracing::info!("Deleted transaction {transaction_id}");
    } else {
        tracing::debug!("Tried to delete transaction {transaction_id}, but it does not exist");
    }

    Ok(redirect_to_transactions_page().into_response())
}
