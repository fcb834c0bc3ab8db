//! Codec module for decoding requests and encoding responses
//!
//! Both sides plug into `tokio_util::codec`, so a connection is simply a
//! `FramedRead` over the read half and a `FramedWrite` over the write half.
//!
//! # Architecture
//!
//! - Request handling:
//!   - [`RequestDecoder`]: decodes the single request of a connection
//!   - start line and header line parsing via the `header` module
//!   - fixed-length body decoding via the `body` module
//!
//! - Response handling:
//!   - [`ResponseEncoder`]: writes status line, the two fixed headers and the body
//!
//! # Example
//!
//! ```no_run
//! use bank_http::codec::{DecoderConfig, RequestDecoder, ResponseEncoder};
//! use bank_http::protocol::Response;
//! use tokio_util::codec::{Decoder, Encoder};
//! use bytes::BytesMut;
//!
//! // Decode incoming request
//! let mut decoder = RequestDecoder::new(DecoderConfig::default().into());
//! let mut request_buffer = BytesMut::new();
//! let request = decoder.decode(&mut request_buffer);
//!
//! // Encode outgoing response
//! let mut encoder = ResponseEncoder::new();
//! let mut response_buffer = BytesMut::new();
//! encoder.encode(Response::ok("{}"), &mut response_buffer).unwrap();
//! ```

mod body;
mod header;
mod line;
mod request_decoder;
mod response_encoder;

pub use body::LengthDecoder;
pub use request_decoder::{DEFAULT_MAX_BODY_BYTES, DEFAULT_MAX_HEADER_NUM, DEFAULT_MAX_LINE_BYTES};
pub use request_decoder::{DecoderConfig, RequestDecoder};
pub use response_encoder::ResponseEncoder;
