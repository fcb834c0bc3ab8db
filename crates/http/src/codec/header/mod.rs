//! Parsing of the request head: the start line and the header lines.
//!
//! Both parsers work on a single already-split line and know nothing about
//! buffering; [`RequestDecoder`](crate::codec::RequestDecoder) feeds them.
//!
//! # Components
//!
//! - [`parse_start_line`]: `<METHOD> /<base>/<path> <version>`
//!   - only the first two space separated tokens are looked at
//!   - the first target segment must be the configured base segment
//! - [`parse_header_line`]: `<Name>: <value>`

mod header_line;
mod start_line;

pub(crate) use header_line::INVALID_HEADER_LINE;
pub(crate) use header_line::parse_header_line;
pub(crate) use start_line::INVALID_START_LINE;
pub(crate) use start_line::StartLine;
pub(crate) use start_line::parse_start_line;
