use http::Method;
use tracing::{debug, warn};

use crate::ensure;
use crate::handler::BankService;
use crate::protocol::{Failure, ParsedRequest, Response, ServiceError};

const BODY_IS_EMPTY: &str = "Body is empty";
const MALFORMED_BODY: &str = "Error while serialization body";

/// The operation a request is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    GetBalance,
    Signup,
    Signin,
    TransferMoney,
}

impl RouteTarget {
    /// Picks the route for a request from its method and path.
    ///
    /// - `GET money` is [`RouteTarget::GetBalance`], any other `GET` path is not found
    /// - a `POST` without a body, or with an empty one, is rejected before looking at the path
    /// - `POST money`, `POST signup` and `POST signin` map to their operations,
    ///   any other `POST` path is not found
    /// - every other method is not allowed
    pub fn resolve(request: &ParsedRequest) -> Result<Self, Failure> {
        if request.is_method(&Method::GET) {
            return match request.path() {
                "money" => Ok(RouteTarget::GetBalance),
                path => Err(resource_not_found(path)),
            };
        }

        if request.is_method(&Method::POST) {
            ensure!(!request.body_is_empty(), Failure::invalid_request(BODY_IS_EMPTY));

            return match request.path() {
                "money" => Ok(RouteTarget::TransferMoney),
                "signup" => Ok(RouteTarget::Signup),
                "signin" => Ok(RouteTarget::Signin),
                path => Err(resource_not_found(path)),
            };
        }

        Err(Failure::method_not_allowed(format!("Method {} not allowed.", request.method())))
    }
}

/// Routes `request` and calls the matching service operation.
///
/// The request is moved into the service. A [`ServiceError::MalformedBody`] is
/// reported to the client as an invalid request with a fixed message; business
/// failures are returned unchanged.
pub async fn dispatch<S>(service: &S, request: ParsedRequest) -> Result<Response, Failure>
where
    S: BankService + ?Sized,
{
    let target = RouteTarget::resolve(&request)?;
    debug!(?target, "dispatch request");

    let result = match target {
        RouteTarget::GetBalance => service.get_balance(request).await,
        RouteTarget::Signup => service.signup(request).await,
        RouteTarget::Signin => service.signin(request).await,
        RouteTarget::TransferMoney => service.transfer_money(request).await,
    };

    result.map_err(|e| match e {
        ServiceError::Rejected(failure) => failure,
        ServiceError::MalformedBody { reason } => {
            warn!(?target, %reason, "service can't deserialize request body");
            Failure::invalid_request(MALFORMED_BODY)
        }
    })
}

fn resource_not_found(path: &str) -> Failure {
    Failure::resource_not_found(format!("Resource not found \"{path}\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::MockBankService;
    use http::StatusCode;

    fn service_never_called() -> MockBankService {
        let mut service = MockBankService::new();
        service.expect_get_balance().never();
        service.expect_signup().never();
        service.expect_signin().never();
        service.expect_transfer_money().never();
        service
    }

    #[test]
    fn resolve_routes() {
        let cases = [
            (ParsedRequest::new("GET", "money"), RouteTarget::GetBalance),
            (ParsedRequest::new("get", "money"), RouteTarget::GetBalance),
            (ParsedRequest::new("POST", "money").with_body("{}"), RouteTarget::TransferMoney),
            (ParsedRequest::new("POST", "signup").with_body("{}"), RouteTarget::Signup),
            (ParsedRequest::new("Post", "signin").with_body("{}"), RouteTarget::Signin),
        ];

        for (request, target) in cases {
            assert_eq!(RouteTarget::resolve(&request), Ok(target), "{request:?}");
        }
    }

    #[test]
    fn unknown_get_path() {
        let request = ParsedRequest::new("GET", "signup");
        assert_eq!(RouteTarget::resolve(&request), Err(Failure::resource_not_found("Resource not found \"signup\"")));
    }

    #[test]
    fn unknown_post_path() {
        let request = ParsedRequest::new("POST", "loans").with_body("{}");
        assert_eq!(RouteTarget::resolve(&request), Err(Failure::resource_not_found("Resource not found \"loans\"")));
    }

    #[test]
    fn empty_body_checked_before_path() {
        for request in [ParsedRequest::new("POST", "loans"), ParsedRequest::new("POST", "signup").with_body("")] {
            assert_eq!(RouteTarget::resolve(&request), Err(Failure::invalid_request(BODY_IS_EMPTY)));
        }
    }

    #[test]
    fn other_methods_not_allowed() {
        for method in ["PUT", "DELETE", "HEAD", "PATCH", "BREW"] {
            for path in ["money", "signup", "nothing"] {
                let request = ParsedRequest::new(method, path).with_body("{}");
                assert_eq!(
                    RouteTarget::resolve(&request),
                    Err(Failure::method_not_allowed(format!("Method {method} not allowed.")))
                );
            }
        }
    }

    #[tokio::test]
    async fn dispatch_to_signup() {
        let mut service = MockBankService::new();
        service
            .expect_signup()
            .withf(|request| request.body() == Some(r#"{"username":"a","password":"p"}"#))
            .times(1)
            .returning(|_| Ok(Response::created(r#"{"token": "t"}"#)));

        let request = ParsedRequest::new("POST", "signup").with_body(r#"{"username":"a","password":"p"}"#);
        let response = dispatch(&service, request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.body(), r#"{"token": "t"}"#);
    }

    #[tokio::test]
    async fn dispatch_passes_headers_to_balance() {
        let mut service = MockBankService::new();
        service
            .expect_get_balance()
            .withf(|request| request.headers().authorization() == Some("Bearer abc"))
            .times(1)
            .returning(|_| Ok(Response::ok(r#"{"balance": 10}"#)));

        let request = ParsedRequest::new("GET", "money").with_header("Authorization", "Bearer abc");
        let response = dispatch(&service, request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn dispatch_keeps_business_failure() {
        let mut service = MockBankService::new();
        service
            .expect_transfer_money()
            .times(1)
            .returning(|_| Err(Failure::insufficient_funds("Not enough money").into()));

        let request = ParsedRequest::new("POST", "money").with_body(r#"{"to":"b","amount":1000}"#);
        let failure = dispatch(&service, request).await.unwrap_err();
        assert_eq!(failure, Failure::insufficient_funds("Not enough money"));
    }

    #[tokio::test]
    async fn dispatch_reclassifies_malformed_body() {
        let mut service = MockBankService::new();
        service.expect_signin().times(1).returning(|_| Err(ServiceError::malformed_body("expected value at line 1")));

        let request = ParsedRequest::new("POST", "signin").with_body("not json");
        let failure = dispatch(&service, request).await.unwrap_err();
        assert_eq!(failure, Failure::invalid_request(MALFORMED_BODY));
    }

    #[tokio::test]
    async fn empty_post_never_reaches_service() {
        let service = service_never_called();

        for path in ["money", "signup", "signin"] {
            let failure = dispatch(&service, ParsedRequest::new("POST", path)).await.unwrap_err();
            assert_eq!(failure, Failure::invalid_request(BODY_IS_EMPTY));
        }
    }
}
