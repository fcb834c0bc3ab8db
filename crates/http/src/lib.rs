//! The request/response core of the bank server
//!
//! This crate speaks a small, line based subset of HTTP/1.1 directly over TCP
//! and forwards every request to a banking service. It owns the wire protocol
//! only: accepting connections, parsing the request, choosing the operation,
//! and turning failures into status responses. Accounts, credentials and money
//! live behind the [`handler::BankService`] trait.
//!
//! # Protocol
//!
//! ```text
//! <METHOD> /<base>/<path> HTTP/1.1
//! <Header-Name>: <value>
//! ...
//! <blank line>
//! <exactly Content-Length bytes of body, if the header was sent>
//! ```
//!
//! Every connection carries one request and receives one response:
//!
//! ```text
//! HTTP/1.1 <code> <phrase>
//! Content-Type: application/json
//! Content-Length: <n>
//!
//! <json body>
//! ```
//!
//! Only `GET /<base>/money`, `POST /<base>/money`, `POST /<base>/signup` and
//! `POST /<base>/signin` are routed. No chunked bodies, keep-alive, pipelining or TLS.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use bank_http::handler::BankService;
//! use bank_http::protocol::{Failure, ParsedRequest, Response, ServiceError};
//! use bank_http::server::Server;
//! use tracing::{error, Level};
//! use tracing_subscriber::FmtSubscriber;
//!
//! struct Closed;
//!
//! #[async_trait]
//! impl BankService for Closed {
//!     async fn get_balance(&self, _request: ParsedRequest) -> Result<Response, ServiceError> {
//!         Ok(Response::ok(r#"{"balance": 0}"#))
//!     }
//!
//!     async fn signup(&self, _request: ParsedRequest) -> Result<Response, ServiceError> {
//!         Err(Failure::malformed_argument("Signup is closed").into())
//!     }
//!
//!     async fn signin(&self, _request: ParsedRequest) -> Result<Response, ServiceError> {
//!         Err(Failure::no_such_user("No such user").into())
//!     }
//!
//!     async fn transfer_money(&self, _request: ParsedRequest) -> Result<Response, ServiceError> {
//!         Err(Failure::insufficient_funds("Not enough money").into())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
//!     tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
//!
//!     let server = Server::builder().address("127.0.0.1:8080").base_segment("bank").build().unwrap();
//!     let listener = match server.listen().await {
//!         Ok(listener) => listener,
//!         Err(e) => {
//!             error!(cause = %e, "can't start server");
//!             return;
//!         }
//!     };
//!
//!     listener.serve(Arc::new(Closed)).await;
//! }
//! ```
//!
//! # Architecture
//!
//! - [`server`]: binding and the accept loop, one tokio task per connection
//! - [`connection`]: the single request/response exchange of a connection
//! - [`codec`]: request decoding and response encoding
//! - [`handler`]: the [`handler::BankService`] seam and routing
//! - [`protocol`]: request, response and error types, failure classification
//!
//! # Error Handling
//!
//! - [`protocol::Failure`]: everything a client is told about, mapped to a
//!   status by [`protocol::classify`]
//! - [`protocol::ParseError`], [`protocol::SendError`], [`protocol::HttpError`]:
//!   connection level errors
//! - [`protocol::ServiceError`]: what the banking service reports
//! - [`server::ServerError`]: configuration and bind errors

pub mod codec;
pub mod connection;
pub mod handler;
pub mod protocol;
pub mod server;

mod utils;
pub(crate) use utils::ensure;
