use bank_http::protocol::{Failure, ServiceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("No such user")]
    NoSuchUser,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Authorization header is missing")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Not enough money")]
    InsufficientFunds,

    #[error("Username and password must not be blank")]
    BlankCredentials,

    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("Can't transfer money to yourself")]
    SelfTransfer,

    #[error("malformed body: {source}")]
    MalformedBody {
        #[from]
        source: serde_json::Error,
    },
}

impl From<BankError> for ServiceError {
    fn from(e: BankError) -> Self {
        let message = e.to_string();
        match e {
            BankError::UserAlreadyExists => Failure::user_already_exists(message).into(),
            BankError::NoSuchUser => Failure::no_such_user(message).into(),
            BankError::WrongPassword | BankError::MissingToken | BankError::InvalidToken => {
                Failure::authentication_failure(message).into()
            }
            BankError::InsufficientFunds => Failure::insufficient_funds(message).into(),
            BankError::BlankCredentials | BankError::InvalidAmount | BankError::SelfTransfer => {
                Failure::malformed_argument(message).into()
            }
            BankError::MalformedBody { source } => ServiceError::malformed_body(source),
        }
    }
}
