use qfx_core::HeaderMap;

use crate::error::{QfxError, Result};

/// Parses the `KEY:VALUE` preamble that precedes the first tag.
pub fn parse_headers(text: &str) -> Result<HeaderMap> {
    let first_tag = text.find('<').ok_or(QfxError::MalformedDocument)?;
    let preamble = &text[..first_tag];
    let preamble = preamble.strip_suffix('\n').unwrap_or(preamble);

    Ok(preamble
        .split('\n')
        .filter_map(header_pair)
        .fold(HeaderMap::new(), |mut headers, (key, value)| {
            headers.insert(key.to_string(), value.to_string());
            headers
        }))
}

/// A line qualifies when its first `:` sits past the first two characters.
fn header_pair(line: &str) -> Option<(&str, &str)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let colon = line.find(':')?;
    if colon <= 1 {
        return None;
    }
    Some((&line[..colon], &line[colon + 1..]))
}
