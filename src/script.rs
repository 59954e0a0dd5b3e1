//! Replaying deposits and withdrawals from a CSV operation script.
//!
//! A script looks like
//!
//! |type       |amount |
//! |-----------|-------|
//! |deposit    |1000   |
//! |withdrawal |200    |

use std::io::Read;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::account::{Account, AccountError};
use crate::clock::Clock;
use crate::transaction::TransactionKind;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("malformed operation script: {0}")]
    Malformed(#[from] csv::Error),
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Whether to deposit or withdraw. See `TransactionKind`.
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Requested amount, always given as a positive number.
    pub amount: i64,
}

impl Operation {
    pub fn apply<C: Clock>(&self, account: &mut Account<C>) -> Result<(), AccountError> {
        match self.kind {
            TransactionKind::Deposit => account.deposit(self.amount),
            TransactionKind::Withdrawal => account.withdraw(self.amount),
        }
    }
}

pub fn read_operations<R: Read>(reader: R) -> Result<Vec<Operation>, ScriptError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let operations = rdr
        .deserialize::<Operation>()
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = operations.len(), "read operation script");
    Ok(operations)
}

/// Applies `operations` in order, stopping at the first one that fails.
///
/// Operations before the failing one stay applied.
pub fn replay<'a, C, I>(account: &mut Account<C>, operations: I) -> Result<(), AccountError>
where
    C: Clock,
    I: IntoIterator<Item = &'a Operation>,
{
    for operation in operations {
        operation.apply(account)?;
    }
    Ok(())
}
