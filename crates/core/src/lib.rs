pub mod connection;
pub mod date;
pub mod document;
pub mod statement;

pub use connection::{BankInformation, ServerConnectionInfo, Status};
pub use date::{parse_timestamp, DateError, DateRange, ServerDate};
pub use document::{HeaderMap, QfxDocument};
pub use statement::{CreditCardStatement, Transaction};
