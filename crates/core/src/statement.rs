use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::connection::Status;
use super::date::DateRange;

/// One `<STMTTRN>` entry. Only the transaction type is extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub trn_type: String,
}

impl Transaction {
    pub fn new(trn_type: &str) -> Self {
        Transaction {
            trn_type: trn_type.to_string(),
        }
    }
}

/// Credit-card statement transaction response (`<CCSTMTTRNRS>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardStatement {
    pub transaction_uid: String,
    pub status: Status,
    pub default_currency: String,
    pub account_id: String,
    pub account_key: String,
    pub period_start: NaiveDateTime,
    pub period_end: NaiveDateTime,
    pub transactions: Vec<Transaction>,
}

impl CreditCardStatement {
    pub fn period(&self) -> DateRange {
        DateRange::new(self.period_start, self.period_end)
    }
}
