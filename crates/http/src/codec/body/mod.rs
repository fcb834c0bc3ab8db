//! Request body handling.
//!
//! Only fixed-length bodies are supported: the Content-Length header decides
//! how many bytes follow the head. Chunked transfer encoding is not.

mod length_decoder;

pub use length_decoder::LengthDecoder;

use crate::ensure;
use crate::protocol::Failure;

/// Parses a Content-Length value as a decimal byte count no larger than `max_body_bytes`.
pub(crate) fn parse_content_length(value: &str, max_body_bytes: usize) -> Result<usize, Failure> {
    let length = value
        .trim()
        .parse::<usize>()
        .map_err(|e| Failure::invalid_request(format!("Invalid Content-Length header. ({e})")))?;

    ensure!(
        length <= max_body_bytes,
        Failure::invalid_request(format!("Request body exceeds the limit of {max_body_bytes} bytes."))
    );

    Ok(length)
}
