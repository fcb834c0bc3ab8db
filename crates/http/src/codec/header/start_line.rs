//! Request start line parsing.
//!
//! The start line is split on single spaces. The first token is the method and
//! the second is the request target; anything after that (usually the version)
//! is ignored. The target is matched against the configured base segment:
//!
//! ```text
//! POST /bank/signup HTTP/1.1
//!       ^^^^ ^^^^^^
//!       base path
//! ```
//!
//! The base match is case sensitive and exactly one level deep. Segments after
//! the path and any query string are dropped. With an empty base segment the
//! first segment of the target is the path.

use crate::ensure;
use crate::protocol::Failure;

pub(crate) const INVALID_START_LINE: &str = "Invalid http request start line.";
const UNKNOWN_REQUEST_URL: &str = "Unknown request URL.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StartLine {
    pub(crate) method: String,
    pub(crate) path: String,
}

pub(crate) fn parse_start_line(line: &str, base_segment: &str) -> Result<StartLine, Failure> {
    let mut tokens = line.split(' ');

    let method = tokens.next().filter(|method| !method.is_empty()).ok_or_else(invalid_start_line)?;
    let target = tokens.next().filter(|target| !target.is_empty()).ok_or_else(invalid_start_line)?;

    let path = resolve_path(target, base_segment)?;

    Ok(StartLine { method: method.to_string(), path: path.to_string() })
}

fn resolve_path<'a>(target: &'a str, base_segment: &str) -> Result<&'a str, Failure> {
    let target = target.split_once('?').map_or(target, |(path, _query)| path);
    let mut segments = target.strip_prefix('/').unwrap_or(target).split('/');

    if !base_segment.is_empty() {
        let first = segments.next().unwrap_or_default();
        ensure!(first == base_segment, Failure::invalid_request(UNKNOWN_REQUEST_URL));
    }

    segments.next().filter(|path| !path.is_empty()).ok_or_else(invalid_start_line)
}

fn invalid_start_line() -> Failure {
    Failure::invalid_request(INVALID_START_LINE)
}
