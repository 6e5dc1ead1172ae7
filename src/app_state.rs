//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;

use crate::{Error, transaction::TransactionStore};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store holding every transaction.
    ///
    /// All reads and writes go through this one lock.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl AppState {
    /// Create a new [AppState] that owns `transaction_store`.
    pub fn new(transaction_store: TransactionStore) -> Self {
        Self {
            transaction_store: Arc::new(Mutex::new(transaction_store)),
        }
    }
}

impl Default for AppState {
    /// An [AppState] holding the sample transactions.
    fn default() -> Self {
        Self::new(TransactionStore::with_seed_data())
    }
}

/// The state needed by the route handlers that read or modify transactions.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The store holding every transaction.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

impl TransactionState {
    /// Acquire the lock for the transaction store.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if another thread panicked while holding the lock.
    pub fn lock_store(&self) -> Result<MutexGuard<'_, TransactionStore>, Error> {
        self.transaction_store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire transaction store lock: {error}"))
            .map_err(|_| Error::StoreLockError)
    }

    /// Create a state holding `transaction_store`, used to call handlers directly in tests.
    #[cfg(test)]
    pub fn new(transaction_store: TransactionStore) -> Self {
        Self {
            transaction_store: Arc::new(Mutex::new(transaction_store)),
        }
    }
}
