//! Percent-encoding of caller-supplied path segments.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::Error;

/// Characters left as-is by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes one path segment so the server decodes back the literal value.
///
/// `""`, `.` and `..` are rejected: the URL parser collapses them (also in
/// their `%2e` forms), which would change the addressed resource.
pub fn encode_segment(segment: &str) -> Result<String, Error> {
    if segment.is_empty() || segment == "." || segment == ".." {
        return Err(Error::InvalidPathSegment(segment.to_string()));
    }
    Ok(utf8_percent_encode(segment, COMPONENT).to_string())
}

/// Joins literal and encoded segments into a path starting with `/`.
pub(crate) fn build_path(literal: &str, segments: &[&str]) -> Result<String, Error> {
    let mut path = literal.to_string();
    for segment in segments {
        path.push('/');
        path.push_str(&encode_segment(segment)?);
    }
    Ok(path)
}
