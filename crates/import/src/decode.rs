use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// How raw file bytes become text before any tag lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TextEncoding {
    /// UTF-8, invalid sequences replaced with U+FFFD.
    Utf8,
    /// ISO-8859-1: every byte is the code point of the same value.
    Latin1,
    /// Windows code page 1252, the `CHARSET:1252` of OFX 1.x preambles.
    /// Bytes 0x80-0x9F carry typographic characters (`’`, `–`, `€`).
    #[default]
    Windows1252,
}

impl std::str::FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            "windows1252" | "windows-1252" | "cp1252" | "1252" => Ok(TextEncoding::Windows1252),
            other => Err(format!("Unknown text encoding: '{other}'")),
        }
    }
}

impl TryFrom<String> for TextEncoding {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "utf8"),
            TextEncoding::Latin1 => write!(f, "latin1"),
            TextEncoding::Windows1252 => write!(f, "windows1252"),
        }
    }
}

impl From<TextEncoding> for String {
    fn from(encoding: TextEncoding) -> Self {
        encoding.to_string()
    }
}

impl TextEncoding {
    pub fn decode<'a>(self, data: &'a [u8]) -> Cow<'a, str> {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(data),
            TextEncoding::Windows1252 => {
                encoding_rs::WINDOWS_1252
                    .decode_without_bom_handling(data)
                    .0
            }
            TextEncoding::Latin1 if data.is_ascii() => {
                // ASCII is valid UTF-8 and maps to itself in Latin-1.
                Cow::Borrowed(std::str::from_utf8(data).unwrap_or_default())
            }
            TextEncoding::Latin1 => Cow::Owned(data.iter().map(|&b| char::from(b)).collect()),
        }
    }
}
