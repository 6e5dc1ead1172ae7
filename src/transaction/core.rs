//! Defines the core data model for transactions and the in-memory store that holds them.

// ============================================================================
// MODELS
// ============================================================================

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction.
    ///
    /// IDs are assigned when a transaction is added and never change afterwards.
    pub id: TransactionId,
    /// When the transaction happened.
    ///
    /// This is free-form text and is not parsed as a calendar date.
    pub date: String,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Positive values represent income, negative values represent expenses.
    pub amount: f64,
}

// ============================================================================
// STORE
// ============================================================================

/// An ordered, in-memory collection of [Transaction]s.
///
/// Transactions are kept in insertion order. Editing a transaction never
/// changes its position.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create a store with no transactions.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
        }
    }

    /// Create a store with the three sample transactions the app starts with.
    pub fn with_seed_data() -> Self {
        Self {
            transactions: vec![
                Transaction {
                    id: 1,
                    date: "2023-06-01".to_owned(),
                    amount: 100.0,
                },
                Transaction {
                    id: 2,
                    date: "2023-06-02".to_owned(),
                    amount: -200.0,
                },
                Transaction {
                    id: 3,
                    date: "2023-06-03".to_owned(),
                    amount: 300.0,
                },
            ],
        }
    }

    /// All transactions in insertion order.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Add a new transaction to the end of the store and return a copy of it.
    ///
    /// The new ID is the number of transactions currently in the store plus
    /// one. After a deletion this can hand out an ID that is already in use,
    /// e.g., deleting transaction 2 out of 3 and then adding a transaction
    /// yields a second transaction with the ID 3.
    pub fn append(&mut self, date: &str, amount: f64) -> Transaction {
        let transaction = Transaction {
            id: self.transactions.len() as TransactionId + 1,
            date: date.to_owned(),
            amount,
        };

        self.transactions.push(transaction.clone());

        transaction
    }

    /// Get the first transaction with the ID `id`.
    pub fn find_by_id(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    /// Overwrite the date and amount of the first transaction with the ID `id`.
    ///
    /// Returns `false` and leaves the store untouched if there is no such transaction.
    pub fn update(&mut self, id: TransactionId, date: &str, amount: f64) -> bool {
        match self
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
        {
            Some(transaction) => {
                transaction.date = date.to_owned();
                transaction.amount = amount;
                true
            }
            None => false,
        }
    }

    /// Remove the first transaction with the ID `id`.
    ///
    /// Returns `false` and leaves the store untouched if there is no such transaction.
    pub fn remove(&mut self, id: TransactionId) -> bool {
        match self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
        {
            Some(index) => {
                self.transactions.remove(index);
                true
            }
            None => false,
        }
    }

    /// The sum of the amounts of all transactions, or zero for an empty store.
    pub fn sum_amounts(&self) -> f64 {
        self.transactions
            .iter()
            .fold(0.0, |total, transaction| total + transaction.amount)
    }

    /// Get the transactions whose amount lies within `min` and `max` inclusive.
    ///
    /// A bound that is `None` does not constrain that side of the range.
    /// Amounts that are NaN never satisfy a bound.
    pub fn filter_by_range(&self, min: Option<f64>, max: Option<f64>) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| {
                let amount = transaction.amount;

                min.is_none_or(|min| amount >= min) && max.is_none_or(|max| amount <= max)
            })
            .cloned()
            .collect()
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::with_seed_data()
    }
}

// ============================================================================
// TESTS
// ============================================================================
