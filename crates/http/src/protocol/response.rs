//! HTTP response representation.
//!
//! Every response the server writes is a status code plus a JSON text body.
//! The status phrase is not stored; it is the canonical reason of the code.

use http::StatusCode;

/// A status code and the JSON text sent along with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    body: String,
}

impl Response {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// `200 OK` with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// `201 Created` with the given body.
    pub fn created(body: impl Into<String>) -> Self {
        Self::new(StatusCode::CREATED, body)
    }

    /// Builds a `{"message": "..."}` body. The message is embedded as-is.
    pub fn message(status: StatusCode, message: &str) -> Self {
        Self::new(status, format!("{{\"message\": \"{message}\"}}"))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The phrase written after the status code on the status line.
    pub fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("Unknown")
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }
}
