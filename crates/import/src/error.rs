use qfx_core::DateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QfxError {
    #[error("Element not found: <{0}>...</{0}>")]
    ElementNotFound(String),
    #[error("Unterminated value for <{0}>")]
    UnterminatedValue(String),
    #[error("Malformed document: no tagged section")]
    MalformedDocument,
    #[error(transparent)]
    Date(#[from] DateError),
    #[error("Invalid import config: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QfxError>;
