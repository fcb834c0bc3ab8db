use crate::protocol::Failure;

pub(crate) const INVALID_HEADER_LINE: &str = "Invalid http header line.";

/// Splits a header line into name and value on `": "`.
///
/// The separator must occur exactly once and both halves must be non-empty.
/// A bare `:` is not a separator, so `Host: localhost:8080` is accepted.
pub(crate) fn parse_header_line(line: &str) -> Result<(&str, &str), Failure> {
    let mut parts = line.split(": ");
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(value), None) if !name.is_empty() && !value.is_empty() => Ok((name, value)),
        _ => Err(Failure::invalid_request(INVALID_HEADER_LINE)),
    }
}
