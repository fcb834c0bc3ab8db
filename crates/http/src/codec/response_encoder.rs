//! Response encoder implementation.
//!
//! Serializes a [`Response`] into one contiguous buffer:
//!
//! ```text
//! HTTP/1.1 <code> <phrase>\r\n
//! Content-Type: application/json\r\n
//! Content-Length: <body bytes>\r\n
//! \r\n
//! <body>
//! ```

use std::io;
use std::io::Write;

use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;

use crate::protocol::{Response, SendError};

/// Initial buffer size reserved for the status line and headers
const INIT_HEADER_SIZE: usize = 128;

#[derive(Debug, Default)]
pub struct ResponseEncoder;

impl ResponseEncoder {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Encoder<Response> for ResponseEncoder {
    type Error = SendError;

    fn encode(&mut self, item: Response, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let body = item.body().as_bytes();
        dst.reserve(INIT_HEADER_SIZE + body.len());

        write!(FastWrite(dst), "HTTP/1.1 {} {}\r\n", item.status().as_str(), item.reason())?;

        dst.put_slice(b"Content-Type: ");
        dst.put_slice(mime::APPLICATION_JSON.essence_str().as_bytes());
        dst.put_slice(b"\r\n");

        write!(FastWrite(dst), "Content-Length: {}\r\n\r\n", body.len())?;

        dst.put_slice(body);
        Ok(())
    }
}

/// Fast writer implementation for writing to BytesMut.
///
/// Lets `write!` format straight into the buffer without an intermediate `String`.
struct FastWrite<'a>(&'a mut BytesMut);

impl Write for FastWrite<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.put_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    fn encode(response: Response) -> BytesMut {
        let mut dst = BytesMut::new();
        ResponseEncoder::new().encode(response, &mut dst).unwrap();
        dst
    }

    #[test]
    fn exact_bytes() {
        let dst = encode(Response::message(StatusCode::NOT_FOUND, "Resource not found \"cats\""));
        let expected = "HTTP/1.1 404 Not Found\r\n\
                        Content-Type: application/json\r\n\
                        Content-Length: 40\r\n\
                        \r\n\
                        {\"message\": \"Resource not found \"cats\"\"}";
        assert_eq!(&dst[..], expected.as_bytes());
    }

    #[test]
    fn parse_back_with_httparse() {
        let body = r#"{"balance": 120, "owner": "zoë"}"#;
        let dst = encode(Response::ok(body));

        let mut headers = [httparse::EMPTY_HEADER; 4];
        let mut parsed = httparse::Response::new(&mut headers);
        let status = parsed.parse(&dst).unwrap();
        let httparse::Status::Complete(body_offset) = status else {
            panic!("response head must be complete");
        };

        assert_eq!(parsed.code, Some(200));
        assert_eq!(parsed.reason, Some("OK"));
        assert_eq!(parsed.headers.len(), 2);
        assert_eq!(parsed.headers[0].name, "Content-Type");
        assert_eq!(parsed.headers[0].value, b"application/json");
        assert_eq!(parsed.headers[1].name, "Content-Length");

        let content_length: usize = std::str::from_utf8(parsed.headers[1].value).unwrap().parse().unwrap();
        assert_eq!(content_length, body.len());
        assert_eq!(&dst[body_offset..], body.as_bytes());
    }

    #[test]
    fn empty_body() {
        let dst = encode(Response::new(StatusCode::CREATED, ""));
        assert_eq!(&dst[..], &b"HTTP/1.1 201 Created\r\nContent-Type: application/json\r\nContent-Length: 0\r\n\r\n"[..]);
    }
}
