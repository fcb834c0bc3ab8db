//! Connection handling module
//!
//! Each accepted socket is handled by one [`HttpConnection`], running on its own
//! tokio task. A connection carries exactly one request and one response:
//!
//! 1. decode the request with [`RequestDecoder`](crate::codec::RequestDecoder)
//! 2. route it and call the [`BankService`](crate::handler::BankService)
//! 3. turn a failure into its status response
//! 4. encode and write the response, then close
//!
//! There is no keep-alive: whatever the client sends after the first request
//! is ignored.

mod http_connection;

pub use http_connection::HttpConnection;
