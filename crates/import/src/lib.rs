//! Extraction of signon and credit-card statement data from OFX/QFX files,
//! in both closed-tag and SGML-style open-tag form.

pub mod config;
pub mod decode;
pub mod error;
pub mod header;
pub mod qfx;
pub mod tags;

pub use config::ImportConfig;
pub use decode::TextEncoding;
pub use error::{QfxError, Result};
pub use header::parse_headers;
pub use qfx::{
    parse_bank_information, parse_credit_card_statement, parse_document,
    parse_server_connection_info, parse_status, parse_transaction, parse_transaction_list,
};
pub use tags::{element_span, elements, has_tag, value_after_tag};

pub mod import {
    use crate::*;
    use qfx_core::QfxDocument;
    use std::path::Path;

    pub fn import_qfx(data: &[u8], config: &ImportConfig) -> Result<QfxDocument> {
        let text = config.encoding.decode(data);
        parse_document(&text)
    }

    pub fn import_qfx_file(path: &Path, config: &ImportConfig) -> Result<QfxDocument> {
        let data = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "read QFX file");
        import_qfx(&data, config)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::io::Write;

        const SAMPLE_QFX: &[u8] = b"OFXHEADER:100\r
DATA:OFXSGML\r
VERSION:102\r
CHARSET:1252\r
\r
<OFX>\r
<SIGNONMSGSRSV1><SONRS><STATUS><CODE>0<SEVERITY>INFO</STATUS>\r
<DTSERVER>20190105120000[0:GMT]<LANGUAGE>ENG<FI><ORG>B1<FID>10898</FI>\r
<INTU.BID>10898</SONRS></SIGNONMSGSRSV1>\r
<CREDITCARDMSGSRSV1><CCSTMTTRNRS><TRNUID>0<STATUS><CODE>0<SEVERITY>INFO</STATUS>\r
<CCSTMTRS><CURDEF>USD<CCACCTFROM><ACCTID>4111</CCACCTFROM>\r
<BANKTRANLIST><DTSTART>20181207120000<DTEND>20190104120000\r
<STMTTRN><TRNTYPE>DEBIT<NAME>Caf\xe9 Nord</STMTTRN>\r
</BANKTRANLIST></CCSTMTRS></CCSTMTTRNRS></CREDITCARDMSGSRSV1>\r
</OFX>\r
";

        #[test]
        fn import_qfx_bytes() {
            let doc = import_qfx(SAMPLE_QFX, &ImportConfig::default()).unwrap();
            assert_eq!(doc.header("CHARSET"), Some("1252"));
            assert_eq!(doc.headers.len(), 4);
            let info = doc.connection_info.unwrap();
            assert_eq!(info.bank_information.fid, "10898");
            assert_eq!(doc.credit_card_statements[0].transactions[0].trn_type, "DEBIT");
        }

        #[test]
        fn import_qfx_default_decodes_cp1252_punctuation() {
            let data = b"OFXHEADER:100\nCHARSET:1252\n<OFX><SONRS><STATUS><CODE>0</STATUS>\
<DTSERVER>20190105<LANGUAGE>ENG<FI><ORG>Macy\x92s<FID>1</FI></SONRS></OFX>";
            let doc = import_qfx(data, &ImportConfig::default()).unwrap();
            let info = doc.connection_info.unwrap();
            assert_eq!(info.bank_information.org, "Macy\u{2019}s");
        }

        #[test]
        fn import_qfx_utf8_lossy() {
            let config = ImportConfig {
                encoding: TextEncoding::Utf8,
            };
            let doc = import_qfx(SAMPLE_QFX, &config).unwrap();
            assert_eq!(doc.transaction_count(), 1);
        }

        #[test]
        fn import_qfx_file_from_disk() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("statement.qfx");
            std::fs::File::create(&path)
                .unwrap()
                .write_all(SAMPLE_QFX)
                .unwrap();

            let doc = import_qfx_file(&path, &ImportConfig::default()).unwrap();
            assert_eq!(doc.credit_card_statements[0].account_id, "4111");
        }

        #[test]
        fn import_qfx_file_missing_is_io_error() {
            let dir = tempfile::tempdir().unwrap();
            let result = import_qfx_file(&dir.path().join("absent.qfx"), &ImportConfig::default());
            assert!(matches!(result, Err(QfxError::Io(_))));
        }

        #[test]
        fn import_qfx_without_tags_is_malformed() {
            let result = import_qfx(b"OFXHEADER:100\r\nDATA:OFXSGML\r\n", &ImportConfig::default());
            assert!(matches!(result, Err(QfxError::MalformedDocument)));
        }
    }
}
