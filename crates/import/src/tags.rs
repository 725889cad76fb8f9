//! Tag lookup over OFX SGML text.
//!
//! OFX 1.x files mix two conventions: aggregates such as `<STATUS>` are always
//! closed, while leaf elements may be written either as `<CODE>0</CODE>` or as
//! a bare `<CODE>0` running up to the next tag. A leaf value is therefore
//! everything between its opening tag and the next `<`, whichever dialect the
//! file happens to use.

use crate::error::{QfxError, Result};

fn open_tag(tag: &str) -> String {
    format!("<{tag}>")
}

fn close_tag(tag: &str) -> String {
    format!("</{tag}>")
}

/// Returns `<TAG>...</TAG>` inclusive. The closing tag is searched for after
/// the opening one. Only use this for aggregates that are always closed.
pub fn element_span<'a>(text: &'a str, tag: &str) -> Result<&'a str> {
    find_element(text, tag, 0)
        .map(|(start, end)| &text[start..end])
        .ok_or_else(|| QfxError::ElementNotFound(tag.to_string()))
}

/// Trimmed text between `<TAG>` and the next `<`. A missing tag yields an
/// empty string; a tag with no `<` after it means the text was truncated.
pub fn value_after_tag(text: &str, tag: &str) -> Result<String> {
    let open = open_tag(tag);
    let Some(start) = text.find(&open) else {
        tracing::trace!(tag, "tag absent");
        return Ok(String::new());
    };

    let begin = start + open.len();
    let end = text[begin..]
        .find('<')
        .map(|offset| begin + offset)
        .ok_or_else(|| QfxError::UnterminatedValue(tag.to_string()))?;

    Ok(text[begin..end].trim().to_string())
}

/// Whether `<TAG>` occurs anywhere in `text`.
pub fn has_tag(text: &str, tag: &str) -> bool {
    text.contains(&open_tag(tag))
}

/// Successive non-overlapping `<TAG>...</TAG>` spans in document order.
pub fn elements<'a>(text: &'a str, tag: &str) -> Elements<'a> {
    Elements {
        text,
        tag: tag.to_string(),
        cursor: 0,
    }
}

pub struct Elements<'a> {
    text: &'a str,
    tag: String,
    cursor: usize,
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, end) = find_element(self.text, &self.tag, self.cursor)?;
        self.cursor = end;
        Some(&self.text[start..end])
    }
}

/// Byte range of the first complete element at or after `from`.
fn find_element(text: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let open = open_tag(tag);
    let close = close_tag(tag);

    let start = from + text.get(from..)?.find(&open)?;
    let after_open = start + open.len();
    let end = after_open + text[after_open..].find(&close)? + close.len();
    Some((start, end))
}
