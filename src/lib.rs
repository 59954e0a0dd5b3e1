pub mod account;
pub mod clock;
pub mod logging;
pub mod script;
pub mod statement;
pub mod transaction;


pub use account::{Account, AccountError};
pub use clock::{Clock, FixedClock, SystemClock, Timestamp};
pub use statement::{StatementError, StatementPrinter};
pub use transaction::{Transaction, TransactionKind};
