//! Request decoder module
//!
//! This module decodes one request per connection out of a byte stream. The
//! request is line based and read in three strictly ordered steps:
//!
//! 1. the start line: method and target, see [`parse_start_line`]
//! 2. header lines up to the first empty line, see [`parse_header_line`]
//! 3. the body, only when a Content-Length header was sent, see [`LengthDecoder`]
//!
//! # Example
//!
//! ```no_run
//! use bank_http::codec::{DecoderConfig, RequestDecoder};
//! use tokio_util::codec::Decoder;
//! use bytes::BytesMut;
//!
//! let mut decoder = RequestDecoder::new(DecoderConfig::default().into());
//! let mut buffer = BytesMut::from("GET /bank/money HTTP/1.1\r\n\r\n");
//! let request = decoder.decode(&mut buffer);
//! ```

use std::mem;
use std::sync::Arc;

use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::codec::body::{LengthDecoder, parse_content_length};
use crate::codec::header::{INVALID_HEADER_LINE, INVALID_START_LINE, StartLine, parse_header_line, parse_start_line};
use crate::codec::line::{line_to_string, take_line};
use crate::ensure;
use crate::protocol::{Failure, Headers, ParseError, ParsedRequest};

/// Default maximum length of a single start or header line
pub const DEFAULT_MAX_LINE_BYTES: usize = 8 * 1024;

/// Default maximum number of header lines
pub const DEFAULT_MAX_HEADER_NUM: usize = 64;

/// Default maximum body size
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

const UNEXPECTED_END: &str = "Unexpected end of request.";

/// Settings shared by every connection's decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// First target segment every request must start with
    pub base_segment: String,
    pub max_line_bytes: usize,
    pub max_header_num: usize,
    pub max_body_bytes: usize,
}

impl DecoderConfig {
    pub fn with_base_segment(base_segment: impl Into<String>) -> Self {
        Self { base_segment: base_segment.into(), ..Default::default() }
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            base_segment: "bank".to_string(),
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
            max_header_num: DEFAULT_MAX_HEADER_NUM,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// A decoder producing exactly one [`ParsedRequest`] per connection.
///
/// # State Machine
///
/// - `StartLine`: waiting for the first line
/// - `Headers`: collecting header lines until the empty line
/// - `Body`: waiting for Content-Length bytes
/// - `Done`: the request has been produced, remaining input is ignored
#[derive(Debug)]
pub struct RequestDecoder {
    config: Arc<DecoderConfig>,
    state: State,
}

#[derive(Debug)]
enum State {
    StartLine,
    Headers(Head),
    Body(Head, LengthDecoder),
    Done,
}

#[derive(Debug)]
struct Head {
    start_line: StartLine,
    headers: Headers,
    // counts lines, a repeated name is stored once
    header_lines: usize,
}

impl Head {
    fn into_request(self, body: Option<String>) -> ParsedRequest {
        ParsedRequest::from_parts(self.start_line.method, self.start_line.path, self.headers, body)
    }
}

impl RequestDecoder {
    pub fn new(config: Arc<DecoderConfig>) -> Self {
        Self { config, state: State::StartLine }
    }

    /// Returns true once a request has been decoded.
    pub fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }

    fn decode_start_line(&self, src: &mut BytesMut) -> Result<Option<Head>, Failure> {
        let Some(line) = take_line(src, self.config.max_line_bytes)? else {
            return Ok(None);
        };

        let line = line_to_string(&line, INVALID_START_LINE)?;
        let start_line = parse_start_line(&line, &self.config.base_segment)?;
        trace!(method = %start_line.method, path = %start_line.path, "parsed start line");

        Ok(Some(Head { start_line, headers: Headers::new(), header_lines: 0 }))
    }

    /// Reads header lines into `head`; returns true once the empty line was seen.
    fn decode_headers(&self, head: &mut Head, src: &mut BytesMut) -> Result<bool, Failure> {
        while let Some(line) = take_line(src, self.config.max_line_bytes)? {
            if line.is_empty() {
                trace!(header_lines = head.header_lines, header_num = head.headers.len(), "parsed headers");
                return Ok(true);
            }

            ensure!(
                head.header_lines < self.config.max_header_num,
                Failure::invalid_request(format!("Header number exceeds the limit {}.", self.config.max_header_num))
            );

            let line = line_to_string(&line, INVALID_HEADER_LINE)?;
            let (name, value) = parse_header_line(&line)?;
            head.headers.insert(name, value);
            head.header_lines += 1;
        }

        Ok(false)
    }

    fn body_decoder(&self, head: &Head) -> Result<Option<LengthDecoder>, Failure> {
        head.headers
            .content_length()
            .map(|value| parse_content_length(value, self.config.max_body_bytes).map(LengthDecoder::new))
            .transpose()
    }
}

impl Decoder for RequestDecoder {
    type Item = ParsedRequest;
    type Error = ParseError;

    /// Attempts to decode the request from the provided buffer
    ///
    /// # Returns
    ///
    /// - `Ok(Some(request))`: the request is complete
    /// - `Ok(None)`: need more data to proceed, or the request was already produced
    /// - `Err(ParseError::Rejected)`: the request is malformed
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            match mem::replace(&mut self.state, State::Done) {
                State::StartLine => match self.decode_start_line(src)? {
                    Some(head) => self.state = State::Headers(head),
                    None => {
                        self.state = State::StartLine;
                        return Ok(None);
                    }
                },

                State::Headers(mut head) => {
                    if !self.decode_headers(&mut head, src)? {
                        self.state = State::Headers(head);
                        return Ok(None);
                    }

                    match self.body_decoder(&head)? {
                        Some(length_decoder) => self.state = State::Body(head, length_decoder),
                        None => return Ok(Some(head.into_request(None))),
                    }
                }

                State::Body(head, mut length_decoder) => match length_decoder.decode(src)? {
                    Some(bytes) => {
                        let body = String::from_utf8(bytes.to_vec())
                            .map_err(|e| Failure::invalid_request(format!("Body is not valid UTF-8. ({e})")))?;
                        trace!(body_size = body.len(), "parsed body");
                        return Ok(Some(head.into_request(Some(body))));
                    }
                    None => {
                        self.state = State::Body(head, length_decoder);
                        return Ok(None);
                    }
                },

                State::Done => return Ok(None),
            }
        }
    }

    /// Called once the peer stopped sending.
    ///
    /// A stream that ends before the request is complete is rejected; a stream
    /// that ends without a single line is rejected as a missing start line.
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(request) = self.decode(src)? {
            return Ok(Some(request));
        }

        match self.state {
            State::Done => Ok(None),
            State::StartLine if src.is_empty() => {
                self.state = State::Done;
                Err(ParseError::invalid_request(INVALID_START_LINE))
            }
            _ => {
                self.state = State::Done;
                Err(ParseError::invalid_request(UNEXPECTED_END))
            }
        }
    }
}
