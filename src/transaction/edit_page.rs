//! Defines the route handler for the page for editing a transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    app_state::TransactionState,
    endpoints::{self, format_endpoint},
    html::{FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
};

use super::{
    Transaction, TransactionId,
    form::{TransactionFormDefaults, transaction_form},
};

fn edit_transaction_view(transaction: &Transaction) -> Markup {
    let nav_bar = NavBar::new(endpoints::EDIT_TRANSACTION).into_html();
    let edit_transaction_endpoint = format_endpoint(endpoints::EDIT_TRANSACTION, transaction.id);
    let form = transaction_form(
        &edit_transaction_endpoint,
        &TransactionFormDefaults {
            date: Some(transaction.date.as_str()),
            amount: Some(transaction.amount),
        },
        "Save Changes",
    );

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h2 { "Edit Transaction " (transaction.id) }

            (form)
        }
    };

    base("Edit Transaction", &content)
}

/// Renders the form for editing a transaction, pre-filled with its current values.
///
/// # Errors
/// Returns [Error::NotFound] if there is no transaction with the ID `transaction_id`.
pub async fn get_edit_transaction_page(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let transaction = state
        .lock_store()?
        .find_by_id(transaction_id)
        .cloned()
        .ok_or(Error::NotFound)?;

    Ok(edit_transaction_view(&transaction).into_response())
}
