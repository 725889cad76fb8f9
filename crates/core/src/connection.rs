use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::ServerDate;

/// `<STATUS>` aggregate. An absent `MESSAGE` is an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Status {
    pub code: String,
    pub severity: String,
    pub message: String,
}

impl Status {
    pub fn new(code: &str, severity: &str, message: &str) -> Self {
        Status {
            code: code.to_string(),
            severity: severity.to_string(),
            message: message.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == "0"
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{} {}", self.code, self.severity)
        } else {
            write!(f, "{} {}: {}", self.code, self.severity, self.message)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BankInformation {
    pub org: String,
    pub fid: String,
    /// `INTU.BID`
    pub bank_id: String,
    /// `INTU.USERID`
    pub user_id: String,
}

impl BankInformation {
    pub fn new(org: &str, fid: &str, bank_id: &str, user_id: &str) -> Self {
        BankInformation {
            org: org.to_string(),
            fid: fid.to_string(),
            bank_id: bank_id.to_string(),
            user_id: user_id.to_string(),
        }
    }
}

/// Signon response (`<SONRS>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConnectionInfo {
    pub status: Status,
    pub server_date: ServerDate,
    pub language: String,
    pub bank_information: BankInformation,
}
