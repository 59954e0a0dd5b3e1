use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;

use crate::transaction::Transaction;

const HEADER: [&str; 3] = ["DATE", "AMOUNT", "BALANCE"];
const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Error)]
pub enum StatementError {
    #[error("failed to write statement line: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush statement: {0}")]
    Io(#[from] io::Error),
}

/// One rendered row of the statement.
#[derive(Debug, Serialize)]
struct StatementLine {
    #[serde(rename = "DATE")]
    date: String,

    #[serde(rename = "AMOUNT")]
    amount: i64,

    #[serde(rename = "BALANCE")]
    balance: i64,
}

impl From<&Transaction> for StatementLine {
    fn from(transaction: &Transaction) -> Self {
        StatementLine {
            date: transaction.timestamp().format(DATE_FORMAT).to_string(),
            amount: transaction.amount(),
            balance: transaction.balance_after(),
        }
    }
}

/// Renders a ledger as a tab separated table.
///
/// The header is always written, followed by one line per transaction
/// in the order given. Nothing is sorted or filtered.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatementPrinter;

impl StatementPrinter {
    pub fn new() -> Self {
        StatementPrinter
    }

    pub fn print<'a, W, I>(&self, out: W, transactions: I) -> Result<(), StatementError>
    where
        W: Write,
        I: IntoIterator<Item = &'a Transaction>,
    {
        // The header goes out by hand so an empty ledger still gets one.
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .terminator(csv::Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(out);

        wtr.write_record(HEADER)?;

        for transaction in transactions {
            wtr.serialize(StatementLine::from(transaction))?;
        }

        wtr.flush()?;
        Ok(())
    }

    pub fn print_to_stdout<'a, I>(&self, transactions: I) -> Result<(), StatementError>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        self.print(io::stdout().lock(), transactions)
    }
}
