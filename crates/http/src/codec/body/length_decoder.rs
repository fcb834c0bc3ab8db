//! Decoder for request bodies with a Content-Length header.

use bytes::{Bytes, BytesMut};
use tokio_util::codec::Decoder;

use crate::protocol::ParseError;

/// Waits until exactly `length` bytes are buffered and splits them off in one piece.
///
/// Bytes after the body are left in the source buffer untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthDecoder {
    /// The number of body bytes expected
    length: usize,
}

impl LengthDecoder {
    /// Creates a new LengthDecoder instance.
    ///
    /// # Arguments
    /// * `length` - The body length announced by the Content-Length header
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Decoder for LengthDecoder {
    type Item = Bytes;
    type Error = ParseError;

    /// # Returns
    /// * `Ok(Some(bytes))` once the whole body is buffered
    /// * `Ok(None)` when more data is needed
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.len() < self.length {
            src.reserve(self.length - src.len());
            return Ok(None);
        }

        Ok(Some(src.split_to(self.length).freeze()))
    }
}
