use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::connection::ServerConnectionInfo;
use super::statement::CreditCardStatement;

/// Preamble `KEY:VALUE` pairs in file order; a repeated key keeps its last value.
pub type HeaderMap = IndexMap<String, String>;

/// Everything extracted from one OFX/QFX file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QfxDocument {
    pub headers: HeaderMap,
    /// `None` when the file carries no `<SONRS>` block.
    pub connection_info: Option<ServerConnectionInfo>,
    pub credit_card_statements: Vec<CreditCardStatement>,
}

impl QfxDocument {
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// `VERSION` header, e.g. `102` for OFX 1.0.2.
    pub fn version(&self) -> Option<&str> {
        self.header("VERSION")
    }

    pub fn transaction_count(&self) -> usize {
        self.credit_card_statements
            .iter()
            .map(|s| s.transactions.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::Transaction;
    use crate::{date::parse_timestamp, Status};

    fn statement(types: &[&str]) -> CreditCardStatement {
        CreditCardStatement {
            transaction_uid: "0".to_string(),
            status: Status::new("0", "INFO", ""),
            default_currency: "USD".to_string(),
            account_id: "1234".to_string(),
            account_key: String::new(),
            period_start: parse_timestamp("20181207120000").unwrap(),
            period_end: parse_timestamp("20190104120000").unwrap(),
            transactions: types.iter().map(|t| Transaction::new(t)).collect(),
        }
    }

    #[test]
    fn header_lookup() {
        let mut headers = HeaderMap::new();
        headers.insert("OFXHEADER".to_string(), "100".to_string());
        headers.insert("VERSION".to_string(), "102".to_string());
        let doc = QfxDocument {
            headers,
            connection_info: None,
            credit_card_statements: vec![],
        };
        assert_eq!(doc.header("OFXHEADER"), Some("100"));
        assert_eq!(doc.version(), Some("102"));
        assert_eq!(doc.header("CHARSET"), None);
    }

    #[test]
    fn transaction_count_sums_statements() {
        let doc = QfxDocument {
            headers: HeaderMap::new(),
            connection_info: None,
            credit_card_statements: vec![statement(&["DEBIT", "DEBIT"]), statement(&["CREDIT"])],
        };
        assert_eq!(doc.transaction_count(), 3);
    }

    #[test]
    fn serialized_headers_keep_file_order() {
        let mut headers = HeaderMap::new();
        headers.insert("OFXHEADER".to_string(), "100".to_string());
        headers.insert("DATA".to_string(), "OFXSGML".to_string());
        let doc = QfxDocument {
            headers,
            connection_info: None,
            credit_card_statements: vec![],
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.starts_with(r#"{"headers":{"OFXHEADER":"100","DATA":"OFXSGML"}"#));
    }
}
