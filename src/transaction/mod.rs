//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the in-memory `TransactionStore`
//! - The form shared by the add and edit pages
//! - Route handlers for listing, adding, editing and deleting transactions

mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod form;
mod transactions_page;

pub use core::{Transaction, TransactionId, TransactionStore};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::get_create_transaction_page;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use form::parse_optional_amount;
pub use transactions_page::get_transactions_page;

pub(crate) use transactions_page::transactions_view;
