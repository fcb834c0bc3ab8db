use bytes::BytesMut;

use crate::ensure;
use crate::protocol::Failure;

/// Splits the next line off the front of `src`.
///
/// A line ends at `\n`; a `\r` right before it is dropped as well, so both
/// `\r\n` and bare `\n` terminated input is accepted. Returns `Ok(None)` when
/// no complete line is buffered yet.
///
/// # Errors
///
/// Fails with `InvalidRequest` once a line grows past `max_line_bytes`,
/// whether or not its terminator has arrived.
pub(crate) fn take_line(src: &mut BytesMut, max_line_bytes: usize) -> Result<Option<BytesMut>, Failure> {
    match src.iter().position(|b| *b == b'\n') {
        Some(index) => {
            ensure!(index <= max_line_bytes, line_too_long(max_line_bytes));

            let mut line = src.split_to(index + 1);
            line.truncate(index);
            if line.last() == Some(&b'\r') {
                line.truncate(index - 1);
            }
            Ok(Some(line))
        }
        None => {
            ensure!(src.len() <= max_line_bytes, line_too_long(max_line_bytes));
            Ok(None)
        }
    }
}

/// Decodes a line as UTF-8, failing with `message` when it is not.
pub(crate) fn line_to_string(line: &[u8], message: &str) -> Result<String, Failure> {
    std::str::from_utf8(line).map(str::to_owned).map_err(|e| Failure::invalid_request(format!("{message} ({e})")))
}

fn line_too_long(max_line_bytes: usize) -> Failure {
    Failure::invalid_request(format!("Request line exceeds the limit of {max_line_bytes} bytes."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_and_lf() {
        let mut buf = BytesMut::from(&b"first\r\nsecond\nrest"[..]);

        let line = take_line(&mut buf, 64).unwrap().unwrap();
        assert_eq!(&line[..], b"first");

        let line = take_line(&mut buf, 64).unwrap().unwrap();
        assert_eq!(&line[..], b"second");

        assert!(take_line(&mut buf, 64).unwrap().is_none());
        assert_eq!(&buf[..], b"rest");
    }

    #[test]
    fn empty_line() {
        let mut buf = BytesMut::from(&b"\r\nbody"[..]);
        let line = take_line(&mut buf, 64).unwrap().unwrap();
        assert!(line.is_empty());
        assert_eq!(&buf[..], b"body");
    }

    #[test]
    fn too_long_without_terminator() {
        let mut buf = BytesMut::from(&b"0123456789"[..]);
        let result = take_line(&mut buf, 8);
        assert!(matches!(result, Err(Failure::InvalidRequest(_))));
    }

    #[test]
    fn too_long_with_terminator() {
        let mut buf = BytesMut::from(&b"0123456789\r\n"[..]);
        let result = take_line(&mut buf, 8);
        assert!(matches!(result, Err(Failure::InvalidRequest(_))));
    }

    #[test]
    fn invalid_utf8() {
        let result = line_to_string(&[0xff, 0xfe], "Invalid http header line.");
        match result {
            Err(Failure::InvalidRequest(message)) => assert!(message.starts_with("Invalid http header line.")),
            other => panic!("unexpected result {other:?}"),
        }
    }
}
