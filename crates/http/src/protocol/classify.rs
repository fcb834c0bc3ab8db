//! Mapping from [`Failure`] to the status the client sees.
//!
//! All status-code knowledge for failures lives in [`classify`]; the rest of the
//! crate only ever converts a failure into a [`Response`] through it.

use http::StatusCode;

use crate::protocol::{Failure, Response};

/// Returns the status code a failure is reported with.
///
/// | failure                                                   | status |
/// |-----------------------------------------------------------|--------|
/// | `InvalidRequest`, `InsufficientFunds`, `MalformedArgument` | 400    |
/// | `AuthenticationFailure`                                   | 403    |
/// | `ResourceNotFound`, `NoSuchUser`                          | 404    |
/// | `MethodNotAllowed`                                        | 405    |
/// | `UserAlreadyExists`                                       | 409    |
pub fn classify(failure: &Failure) -> StatusCode {
    match failure {
        Failure::InvalidRequest(_) | Failure::InsufficientFunds(_) | Failure::MalformedArgument(_) => {
            StatusCode::BAD_REQUEST
        }
        Failure::ResourceNotFound(_) | Failure::NoSuchUser(_) => StatusCode::NOT_FOUND,
        Failure::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        Failure::AuthenticationFailure(_) => StatusCode::FORBIDDEN,
        Failure::UserAlreadyExists(_) => StatusCode::CONFLICT,
    }
}

impl From<Failure> for Response {
    fn from(failure: Failure) -> Self {
        Response::message(classify(&failure), failure.message())
    }
}
