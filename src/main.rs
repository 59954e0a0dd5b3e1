use std::path::PathBuf;

use account_statement::{logging, script, Account, StatementPrinter};
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Prints a bank account statement.
///
/// Without a script, runs the demonstration: deposit 1000,
/// deposit 500, withdraw 200.
#[derive(Parser, Debug)]
struct Args {
    /// CSV file of `type,amount` operations to replay instead.
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();

    let mut account = Account::new();

    match args.script {
        Some(path) => {
            let file = std::fs::File::open(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            let operations = script::read_operations(file)?;

            info!(count = operations.len(), path = %path.display(), "replaying script");
            script::replay(&mut account, &operations)?;
        }
        None => {
            info!("running demonstration");
            account.deposit(1000)?;
            account.deposit(500)?;
            account.withdraw(200)?;
        }
    }

    StatementPrinter::new().print_to_stdout(account.get_statement())?;
    Ok(())
}
