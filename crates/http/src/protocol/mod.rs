//! Core protocol types.
//!
//! This module holds the values that travel through a connection:
//!
//! - **Requests** ([`request`]): [`ParsedRequest`] and its [`Headers`]
//! - **Responses** ([`response`]): [`Response`], a status plus a JSON body
//! - **Errors** ([`error`]):
//!   - [`Failure`]: the closed set of failures a client can be told about
//!   - [`ParseError`], [`SendError`], [`HttpError`]: connection level errors
//!   - [`ServiceError`]: what the banking service reports back
//! - **Classification** ([`classify`]): the single place failures become status codes

mod request;
pub use request::Headers;
pub use request::ParsedRequest;

mod response;
pub use response::Response;

mod error;
pub use error::Failure;
pub use error::HttpError;
pub use error::ParseError;
pub use error::SendError;
pub use error::ServiceError;

mod classify;
pub use classify::classify;
