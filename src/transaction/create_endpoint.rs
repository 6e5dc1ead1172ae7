//! Defines the route handler that adds a transaction from the submitted form.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;

use crate::{Error, app_state::TransactionState, routing::redirect_to_transactions_page};

use super::form::TransactionForm;

/// A route handler for adding a transaction, redirects to the transactions page on success.
///
/// # Errors
/// Returns [Error::InvalidAmount] if the amount is not a number, in which case
/// no transaction is added.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    Form(form): Form<TransactionForm>,
) -> Result<Response, Error> {
    let amount = form.parse_amount()?;

    let transaction = state.lock_store()?.append(&form.date, amount);
    tracing::info!(
        "Added transaction {} dated {:?} for {}",
        transaction.id,
        transaction.date,
        transaction.amount
    );

    Ok(redirect_to_transactions_page().into_response())
}
