//! The form shared by the add and edit transaction pages, and parsing of its fields.

use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The fields submitted by the add and edit transaction forms.
///
/// `amount` is kept as text so that a non-numeric value can be reported as
/// [Error::InvalidAmount] rather than a generic form rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionForm {
    pub date: String,
    pub amount: String,
}

impl TransactionForm {
    /// Parse the amount field.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if the amount is not a number.
    pub fn parse_amount(&self) -> Result<f64, Error> {
        parse_amount(&self.amount)
    }
}

/// Parse `text` as a floating point number, ignoring surrounding whitespace.
///
/// # Errors
/// Returns [Error::InvalidAmount] holding `text` if it is not a number.
pub fn parse_amount(text: &str) -> Result<f64, Error> {
    text.trim()
        .parse()
        .map_err(|_| Error::InvalidAmount(text.to_owned()))
}

/// Parse an optional bound, treating a missing or blank value as no bound.
///
/// # Errors
/// Returns [Error::InvalidAmount] if a non-blank value is not a number.
pub fn parse_optional_amount(text: Option<&str>) -> Result<Option<f64>, Error> {
    match text {
        Some(text) if !text.trim().is_empty() => parse_amount(text).map(Some),
        _ => Ok(None),
    }
}

/// Values used to pre-fill the transaction form.
#[derive(Debug, Default)]
pub struct TransactionFormDefaults<'a> {
    pub date: Option<&'a str>,
    pub amount: Option<f64>,
}

/// Render a form that posts the date and amount fields to `action`.
pub fn transaction_form(
    action: &str,
    defaults: &TransactionFormDefaults<'_>,
    submit_text: &str,
) -> Markup {
    let amount = defaults.amount.map(|amount| amount.to_string());

    html! {
        form method="post" action=(action)
        {
            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Date"
                }

                input
                    name="date"
                    id="date"
                    type="text"
                    placeholder="YYYY-MM-DD"
                    required
                    autofocus
                    value=[defaults.date]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="any"
                    placeholder="0.00"
                    required
                    value=[amount]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE)
            {
                (submit_text)
            }
        }
    }
}
