//! Searching transactions by amount.
//!
//! The search page shows a form with an optional minimum and maximum amount.
//! Submitting it renders the transactions table with only the transactions
//! whose amount lies within the bounds, with the bounds echoed back into the form.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    app_state::TransactionState,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base},
    navigation::NavBar,
    transaction::{parse_optional_amount, transactions_view},
};

/// The bounds submitted by the search form, exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchForm {
    pub min_amount: Option<String>,
    pub max_amount: Option<String>,
}

/// Render the search form, pre-filled with the bounds in `values`.
pub fn search_form(values: &SearchForm) -> Markup {
    html! {
        form method="post" action=(endpoints::SEARCH) class="search-form"
        {
            div
            {
                label for="min_amount" class=(FORM_LABEL_STYLE) { "Minimum amount" }

                input
                    name="min_amount"
                    id="min_amount"
                    type="number"
                    step="any"
                    value=[values.min_amount.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="max_amount" class=(FORM_LABEL_STYLE) { "Maximum amount" }

                input
                    name="max_amount"
                    id="max_amount"
                    type="number"
                    step="any"
                    value=[values.max_amount.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Search" }
        }
    }
}

fn search_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::SEARCH).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h2 { "Search Transactions" }

            p { "Leave a bound blank to leave that side of the range open." }

            (search_form(&SearchForm::default()))
        }
    };

    base("Search", &content)
}

/// Renders the empty search form.
pub async fn get_search_page() -> Response {
    search_view().into_response()
}

/// A route handler that renders the transactions whose amount lies within the submitted bounds.
///
/// Bounds are inclusive, and a blank bound does not constrain the search.
///
/// # Errors
/// Returns [Error::InvalidAmount] if a bound is not blank and not a number.
pub async fn search_transactions_endpoint(
    State(state): State<TransactionState>,
    Form(form): Form<SearchForm>,
) -> Result<Response, Error> {
    let min_amount = parse_optional_amount(form.min_amount.as_deref())?;
    let max_amount = parse_optional_amount(form.max_amount.as_deref())?;

    let transactions = state
        .lock_store()?
        .filter_by_range(min_amount, max_amount);
    tracing::debug!(
        "Search for amounts between {min_amount:?} and {max_amount:?} matched {} transactions",
        transactions.len()
    );

    Ok(transactions_view(&transactions, Some(&form)).into_response())
}
