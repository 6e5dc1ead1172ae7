//! Defines the route handler for the page that displays transactions as a table.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    app_state::TransactionState,
    endpoints::{self, format_endpoint},
    html::{
        LINK_DELETE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, TABLE_STYLE, amount_class, base, format_currency,
    },
    navigation::NavBar,
    search::{SearchForm, search_form},
};

use super::Transaction;

/// Render the transactions table.
///
/// When `search` is set, the table shows search results and the search form
/// above the table is pre-filled with the bounds the user entered.
pub(crate) fn transactions_view(transactions: &[Transaction], search: Option<&SearchForm>) -> Markup {
    let (active_endpoint, heading, empty_message) = match search {
        Some(_) => (
            endpoints::SEARCH,
            "Search Results",
            "No transactions match your search.",
        ),
        None => (endpoints::ROOT, "Transactions", "No transactions yet."),
    };
    let nav_bar = NavBar::new(active_endpoint).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 { (heading) }

            @if let Some(search) = search {
                (search_form(search))
            }

            table class=(TABLE_STYLE)
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" { "ID" }
                        th scope="col" { "Date" }
                        th scope="col" { "Amount" }
                        th scope="col" { "Actions" }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        (transaction_row_view(transaction))
                    }

                    @if transactions.is_empty() {
                        tr
                        {
                            td
                                colspan="4"
                                data-empty-state="true"
                                class=(TABLE_CELL_STYLE)
                            {
                                (empty_message)
                            }
                        }
                    }
                }
            }

            p
            {
                a href=(endpoints::ADD_TRANSACTION) class=(LINK_STYLE) { "Add transaction" }
            }
        }
    };

    base(heading, &content)
}

fn transaction_row_view(transaction: &Transaction) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION, transaction.id);
    let delete_url = format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id);

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
        {
            td class=(TABLE_CELL_STYLE) { (transaction.id) }
            td class=(TABLE_CELL_STYLE) { (transaction.date) }
            td class={(TABLE_CELL_STYLE) " " (amount_class(transaction.amount))}
            {
                (format_currency(transaction.amount))
            }
            td class=(TABLE_CELL_STYLE)
            {
                a href=(edit_url) class=(LINK_STYLE) { "Edit" }
                " "
                a href=(delete_url) class=(LINK_DELETE_STYLE) { "Delete" }
            }
        }
    }
}

/// Renders the table of every transaction in insertion order.
pub async fn get_transactions_page(State(state): State<TransactionState>) -> Result<Response, Error> {
    let transactions = state.lock_store()?.list().to_vec();

    Ok(transactions_view(&transactions, None).into_response())
}
