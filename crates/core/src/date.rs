use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Invalid OFX date: '{0}'")]
    Invalid(String),
}

/// Raw `DTSERVER` text, e.g. `20190105170625.000[0:GMT]` or `20190105`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerDate(String);

impl fmt::Display for ServerDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ServerDate {
    pub fn new(raw: impl Into<String>) -> Self {
        ServerDate(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Calendar date from the leading `YYYYMMDD`; time and zone are ignored.
    pub fn to_date(&self) -> Result<NaiveDate, DateError> {
        let invalid = || DateError::Invalid(self.0.clone());
        let year = digits(&self.0, 0, 4).ok_or_else(invalid)?;
        let month = digits(&self.0, 4, 6).ok_or_else(invalid)?;
        let day = digits(&self.0, 6, 8).ok_or_else(invalid)?;
        NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(invalid)
    }
}

/// Inclusive statement period (`DTSTART`..=`DTEND`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        DateRange { start, end }
    }

    pub fn contains(self, at: NaiveDateTime) -> bool {
        at >= self.start && at <= self.end
    }
}

/// Decodes the fixed-width `YYYYMMDDhhmmss` prefix of a statement timestamp.
/// Anything past the seconds (`.fff`, `[zone]`) is ignored.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, DateError> {
    let invalid = || DateError::Invalid(raw.to_string());
    let field = |start, end| digits(raw, start, end).ok_or_else(invalid);

    let date = NaiveDate::from_ymd_opt(field(0, 4)? as i32, field(4, 6)?, field(6, 8)?)
        .ok_or_else(invalid)?;
    date.and_hms_opt(field(8, 10)?, field(10, 12)?, field(12, 14)?)
        .ok_or_else(invalid)
}

fn digits(s: &str, start: usize, end: usize) -> Option<u32> {
    let field = s.get(start..end)?;
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
