//! Shows the total of all transactions.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{Error, app_state::TransactionState};

const BALANCE_STYLE: &str = "font-size:3em;color:#333;text-align:center;margin-top:50px;";

/// Render the balance as a single paragraph with the total to two decimal places.
fn balance_view(total: f64) -> Markup {
    html! {
        p style=(BALANCE_STYLE) { "Balance Total: " (format!("{total:.2}")) }
    }
}

/// Renders an HTML fragment with the sum of the amounts of all transactions.
pub async fn get_balance(State(state): State<TransactionState>) -> Result<Response, Error> {
    let total = state.lock_store()?.sum_amounts();

    Ok(balance_view(total).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, response::IntoResponse};

    use crate::{
        app_state::TransactionState,
        test_utils::{assert_content_type, assert_status_ok},
        transaction::TransactionStore,
    };

    use super::{balance_view, get_balance};

    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");

        String::from_utf8_lossy(&body).to_string()
    }

    #[tokio::test]
    async fn seed_balance_is_two_hundred() {
        let state = TransactionState::new(TransactionStore::with_seed_data());

        let response = get_balance(State(state)).await.into_response();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        assert_eq!(
            body_text(response).await,
            "<p style=\"font-size:3em;color:#333;text-align:center;margin-top:50px;\">\
            Balance Total: 200.00</p>"
        );
    }

    #[tokio::test]
    async fn empty_balance_is_zero() {
        let state = TransactionState::new(TransactionStore::new());

        let response = get_balance(State(state)).await.into_response();

        assert!(body_text(response).await.contains("Balance Total: 0.00"));
    }

    #[test]
    fn rounds_to_two_decimal_places() {
        assert!(
            balance_view(-12.345678)
                .into_string()
                .contains("Balance Total: -12.35")
        );
        assert!(balance_view(0.1 + 0.2).into_string().contains("Balance Total: 0.30"));
    }
}
