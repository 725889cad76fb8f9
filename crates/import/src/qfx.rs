use qfx_core::{
    parse_timestamp, BankInformation, CreditCardStatement, QfxDocument, ServerConnectionInfo,
    ServerDate, Status, Transaction,
};

use crate::error::Result;
use crate::header::parse_headers;
use crate::tags::{element_span, elements, has_tag, value_after_tag};

/// `<STATUS>` fields; status aggregates never nest further.
pub fn parse_status(span: &str) -> Result<Status> {
    Ok(Status {
        code: value_after_tag(span, "CODE")?,
        severity: value_after_tag(span, "SEVERITY")?,
        message: value_after_tag(span, "MESSAGE")?,
    })
}

/// Parses a `<SONRS>` span.
pub fn parse_server_connection_info(span: &str) -> Result<ServerConnectionInfo> {
    let status = parse_status(element_span(span, "STATUS")?)?;
    let server_date = ServerDate::new(value_after_tag(span, "DTSERVER")?);
    let language = value_after_tag(span, "LANGUAGE")?;
    let bank_information = parse_bank_information(span)?;

    Ok(ServerConnectionInfo {
        status,
        server_date,
        language,
        bank_information,
    })
}

/// `ORG`/`FID` come from the `<FI>` aggregate; the Intuit `INTU.*` extensions
/// sit beside it in the signon response.
pub fn parse_bank_information(span: &str) -> Result<BankInformation> {
    let fi = element_span(span, "FI")?;

    Ok(BankInformation {
        org: value_after_tag(fi, "ORG")?,
        fid: value_after_tag(fi, "FID")?,
        bank_id: value_after_tag(span, "INTU.BID")?,
        user_id: value_after_tag(span, "INTU.USERID")?,
    })
}

/// Parses a `<CCSTMTTRNRS>` span.
pub fn parse_credit_card_statement(span: &str) -> Result<CreditCardStatement> {
    let transaction_uid = value_after_tag(span, "TRNUID")?;
    let status = parse_status(element_span(span, "STATUS")?)?;

    let ccstmtrs = element_span(span, "CCSTMTRS")?;
    let default_currency = value_after_tag(ccstmtrs, "CURDEF")?;

    let ccacctfrom = element_span(span, "CCACCTFROM")?;
    let account_id = value_after_tag(ccacctfrom, "ACCTID")?;
    let account_key = value_after_tag(ccacctfrom, "ACCTKEY")?;

    let banktranlist = element_span(ccstmtrs, "BANKTRANLIST")?;
    let period_start = parse_timestamp(&value_after_tag(banktranlist, "DTSTART")?)?;
    let period_end = parse_timestamp(&value_after_tag(banktranlist, "DTEND")?)?;
    let transactions = parse_transaction_list(banktranlist)?;

    tracing::debug!(
        account_id = %account_id,
        transactions = transactions.len(),
        "parsed credit card statement"
    );

    Ok(CreditCardStatement {
        transaction_uid,
        status,
        default_currency,
        account_id,
        account_key,
        period_start,
        period_end,
        transactions,
    })
}

/// Every complete `<STMTTRN>` block in document order.
pub fn parse_transaction_list(span: &str) -> Result<Vec<Transaction>> {
    elements(span, "STMTTRN").map(parse_transaction).collect()
}

pub fn parse_transaction(span: &str) -> Result<Transaction> {
    Ok(Transaction {
        trn_type: value_after_tag(span, "TRNTYPE")?,
    })
}

/// Header, signon response and every credit-card statement in a file.
pub fn parse_document(text: &str) -> Result<QfxDocument> {
    let headers = parse_headers(text)?;

    let connection_info = if has_tag(text, "SONRS") {
        Some(parse_server_connection_info(element_span(text, "SONRS")?)?)
    } else {
        None
    };

    let credit_card_statements = elements(text, "CCSTMTTRNRS")
        .map(parse_credit_card_statement)
        .collect::<Result<Vec<_>>>()?;

    let document = QfxDocument {
        headers,
        connection_info,
        credit_card_statements,
    };
    tracing::debug!(
        statements = document.credit_card_statements.len(),
        transactions = document.transaction_count(),
        "parsed QFX document"
    );
    Ok(document)
}
