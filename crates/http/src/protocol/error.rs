use std::io;
use thiserror::Error;

/// The closed set of recoverable failures a request can end in.
///
/// Every variant carries the human-readable message that ends up in the
/// `{"message": "..."}` response body. The message is never rewritten once
/// the failure has been raised, see [`classify`](crate::protocol::classify) for
/// the status each variant maps to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    #[error("no such user: {0}")]
    NoSuchUser(String),

    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("authentication failure: {0}")]
    AuthenticationFailure(String),

    #[error("user already exists: {0}")]
    UserAlreadyExists(String),

    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    #[error("malformed argument: {0}")]
    MalformedArgument(String),
}

impl Failure {
    pub fn invalid_request<S: ToString>(str: S) -> Self {
        Self::InvalidRequest(str.to_string())
    }

    pub fn resource_not_found<S: ToString>(str: S) -> Self {
        Self::ResourceNotFound(str.to_string())
    }

    pub fn no_such_user<S: ToString>(str: S) -> Self {
        Self::NoSuchUser(str.to_string())
    }

    pub fn method_not_allowed<S: ToString>(str: S) -> Self {
        Self::MethodNotAllowed(str.to_string())
    }

    pub fn authentication_failure<S: ToString>(str: S) -> Self {
        Self::AuthenticationFailure(str.to_string())
    }

    pub fn user_already_exists<S: ToString>(str: S) -> Self {
        Self::UserAlreadyExists(str.to_string())
    }

    pub fn insufficient_funds<S: ToString>(str: S) -> Self {
        Self::InsufficientFunds(str.to_string())
    }

    pub fn malformed_argument<S: ToString>(str: S) -> Self {
        Self::MalformedArgument(str.to_string())
    }

    /// The message carried by this failure, as it will appear in the response body.
    pub fn message(&self) -> &str {
        match self {
            Failure::InvalidRequest(message)
            | Failure::ResourceNotFound(message)
            | Failure::NoSuchUser(message)
            | Failure::MethodNotAllowed(message)
            | Failure::AuthenticationFailure(message)
            | Failure::UserAlreadyExists(message)
            | Failure::InsufficientFunds(message)
            | Failure::MalformedArgument(message) => message,
        }
    }
}

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request error: {source}")]
    RequestError {
        #[from]
        source: ParseError,
    },

    #[error("response error: {source}")]
    ResponseError {
        #[from]
        source: SendError,
    },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("rejected request: {source}")]
    Rejected {
        #[from]
        source: Failure,
    },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn invalid_request<S: ToString>(str: S) -> Self {
        Self::Rejected { source: Failure::invalid_request(str) }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl SendError {
    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}

/// What a [`BankService`](crate::handler::BankService) call fails with.
///
/// Business failures are passed through untouched. A body that could not be
/// turned into the service's typed request is reported as `MalformedBody` so
/// the connection can answer with its own generic message instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Rejected(#[from] Failure),

    #[error("malformed body: {reason}")]
    MalformedBody { reason: String },
}

impl ServiceError {
    pub fn malformed_body<S: ToString>(str: S) -> Self {
        Self::MalformedBody { reason: str.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_kept_verbatim() {
        let failure = Failure::user_already_exists("User already exists");
        assert_eq!(failure.message(), "User already exists");
        assert_eq!(failure.to_string(), "user already exists: User already exists");

        let failure = Failure::invalid_request(r#"quote " inside"#);
        assert_eq!(failure.message(), r#"quote " inside"#);
    }

    #[test]
    fn parse_error_wraps_failure() {
        let error = ParseError::invalid_request("Body is empty");
        match error {
            ParseError::Rejected { source } => assert_eq!(source, Failure::invalid_request("Body is empty")),
            ParseError::Io { .. } => panic!("expect rejected error"),
        }
    }

    #[test]
    fn service_error_from_failure() {
        let error: ServiceError = Failure::insufficient_funds("Not enough money").into();
        assert_eq!(error, ServiceError::Rejected(Failure::insufficient_funds("Not enough money")));
    }
}
