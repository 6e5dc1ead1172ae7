//! Defines the route handler that saves changes to a transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;

use crate::{Error, app_state::TransactionState, routing::redirect_to_transactions_page};

use super::{TransactionId, form::TransactionForm};

/// A route handler for editing a transaction, redirects to the transactions page.
///
/// Editing a transaction that does not exist changes nothing and still redirects.
///
/// # Errors
/// Returns [Error::InvalidAmount] if the amount is not a number, in which case
/// the transaction is left unchanged.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<TransactionForm>,
) -> Result<Response, Error> {
    let amount = form.parse_amount()?;

    if state
        .lock_store()?
        .update(transaction_id, &form.date, amount)
    {
        tracing::info!("Updated transaction {transaction_id}");
    } else {
        tracing::debug!("Tried to update transaction {transaction_id}, but it does not exist");
    }

    Ok(redirect_to_transactions_page().into_response())
}
