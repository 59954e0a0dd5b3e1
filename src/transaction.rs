use serde::Deserialize;

use crate::clock::Timestamp;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// A deposit is a credit to the account, meaning it
    /// increases the balance by the amount deposited.
    ///
    /// A deposit is recorded with a positive amount.
    ///
    /// |type       |amount |
    /// |-----------|-------|
    /// |deposit    |1000   |
    Deposit,

    /// A withdrawal is a debit to the account, meaning it
    /// decreases the balance by the amount withdrawn.
    ///
    /// It is requested with a positive amount but recorded
    /// in the ledger as the negation of that amount.
    ///
    /// |type       |amount |
    /// |-----------|-------|
    /// |withdrawal |200    |
    Withdrawal,
}

/// A single ledger entry. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    /// When the entry was recorded.
    timestamp: Timestamp,

    /// Signed amount: positive for deposits, negative for withdrawals.
    amount: i64,

    /// Balance of the account right after this entry was applied.
    balance_after: i64,
}

impl Transaction {
    pub fn new(timestamp: Timestamp, amount: i64, balance_after: i64) -> Self {
        Transaction {
            timestamp,
            amount,
            balance_after,
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn balance_after(&self) -> i64 {
        self.balance_after
    }

    pub fn kind(&self) -> TransactionKind {
        if self.amount < 0 {
            TransactionKind::Withdrawal
        } else {
            TransactionKind::Deposit
        }
    }
}
