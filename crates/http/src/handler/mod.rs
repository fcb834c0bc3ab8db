//! The banking service seam and request routing.
//!
//! The connection never interprets request bodies or credentials. It decides
//! which [`BankService`] operation a request is for ([`RouteTarget`]) and hands
//! the whole [`ParsedRequest`] over.

mod route;

pub use route::RouteTarget;
pub use route::dispatch;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::protocol::{ParsedRequest, Response, ServiceError};

/// The business operations behind the four routes.
///
/// One instance is shared by every connection task, so implementations must be
/// safe to call concurrently. Each call gets the request it was routed from and
/// returns either the success response or a [`ServiceError`].
///
/// A service should report a body it cannot deserialize as
/// [`ServiceError::MalformedBody`], not as a business failure.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BankService: Send + Sync {
    /// `GET /<base>/money`
    async fn get_balance(&self, request: ParsedRequest) -> Result<Response, ServiceError>;

    /// `POST /<base>/signup`
    async fn signup(&self, request: ParsedRequest) -> Result<Response, ServiceError>;

    /// `POST /<base>/signin`
    async fn signin(&self, request: ParsedRequest) -> Result<Response, ServiceError>;

    /// `POST /<base>/money`
    async fn transfer_money(&self, request: ParsedRequest) -> Result<Response, ServiceError>;
}
