//! Defines the route handler for the page for adding a new transaction.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
};

use super::form::{TransactionFormDefaults, transaction_form};

fn create_transaction_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::ADD_TRANSACTION).into_html();
    let form = transaction_form(
        endpoints::ADD_TRANSACTION,
        &TransactionFormDefaults::default(),
        "Add Transaction",
    );

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h2 { "New Transaction" }

            (form)
        }
    };

    base("Add Transaction", &content)
}

/// Renders the empty form for adding a transaction.
pub async fn get_create_transaction_page() -> Response {
    create_transaction_view().into_response()
}
