//! The endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/edit/{transaction_id}', use [format_endpoint].

use crate::transaction::TransactionId;

/// The page listing every transaction.
pub const ROOT: &str = "/";
/// The page and form target for adding a transaction.
pub const ADD_TRANSACTION: &str = "/add";
/// The page and form target for editing an existing transaction.
pub const EDIT_TRANSACTION: &str = "/edit/{transaction_id}";
/// The route that deletes a transaction.
pub const DELETE_TRANSACTION: &str = "/delete/{transaction_id}";
/// The page and form target for searching transactions by amount.
pub const SEARCH: &str = "/search";
/// The route that shows the sum of all transactions.
pub const BALANCE: &str = "/balance";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/edit/{transaction_id}', '{transaction_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: TransactionId) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
