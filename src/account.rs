use thiserror::Error;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::transaction::{Transaction, TransactionKind};

#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    /// Deposit or withdrawal requested with a zero or negative amount.
    #[error("{operation:?} amount must be positive, got {amount}")]
    InvalidArgument {
        operation: TransactionKind,
        amount: i64,
    },

    /// Withdrawal requested for more than the current balance.
    #[error("insufficient funds: requested {requested}, balance {balance}")]
    InsufficientFunds { requested: i64, balance: i64 },

    /// Deposit would push the balance past what an `i64` can hold.
    #[error("deposit of {amount} would overflow balance {balance}")]
    BalanceOverflow { amount: i64, balance: i64 },
}

/// A single account and its ledger.
///
/// Every successful deposit or withdrawal appends exactly one
/// [`Transaction`]; a failed one leaves both the balance and the
/// ledger untouched. The balance is always the sum of the ledger
/// amounts and never drops below zero.
#[derive(Debug)]
pub struct Account<C: Clock = SystemClock> {
    balance: i64,
    ledger: Vec<Transaction>,
    clock: C,
}

impl Account {
    pub fn new() -> Self {
        Account::with_clock(SystemClock)
    }
}

impl Default for Account {
    fn default() -> Self {
        Account::new()
    }
}

impl<C: Clock> Account<C> {
    pub fn with_clock(clock: C) -> Self {
        Account {
            balance: 0,
            ledger: Vec::new(),
            clock,
        }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn deposit(&mut self, amount: i64) -> Result<(), AccountError> {
        if amount <= 0 {
            return Err(self.reject(AccountError::InvalidArgument {
                operation: TransactionKind::Deposit,
                amount,
            }));
        }

        let balance = match self.balance.checked_add(amount) {
            Some(balance) => balance,
            None => {
                return Err(self.reject(AccountError::BalanceOverflow {
                    amount,
                    balance: self.balance,
                }))
            }
        };

        self.record(amount, balance);
        Ok(())
    }

    pub fn withdraw(&mut self, amount: i64) -> Result<(), AccountError> {
        if amount <= 0 {
            return Err(self.reject(AccountError::InvalidArgument {
                operation: TransactionKind::Withdrawal,
                amount,
            }));
        }

        if amount > self.balance {
            return Err(self.reject(AccountError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            }));
        }

        // amount is in 1..=balance, so neither the negation nor the
        // subtraction can overflow.
        self.record(-amount, self.balance - amount);
        Ok(())
    }

    /// The ledger, oldest entry first.
    pub fn get_statement(&self) -> &[Transaction] {
        &self.ledger
    }

    fn record(&mut self, amount: i64, balance: i64) {
        let transaction = Transaction::new(self.clock.now(), amount, balance);
        self.balance = balance;
        self.ledger.push(transaction);

        debug!(
            kind = ?transaction.kind(),
            amount,
            balance,
            "recorded transaction"
        );
    }

    fn reject(&self, error: AccountError) -> AccountError {
        debug!(balance = self.balance, %error, "rejected operation");
        error
    }
}
