use async_trait::async_trait;
use bank_http::handler::BankService;
use bank_http::protocol::{Headers, ParsedRequest, Response, ServiceError};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::bank::InMemoryBank;
use crate::error::BankError;
use crate::model::{Credentials, TransferRequest};

const BEARER: &str = "Bearer ";

fn parse_body<T: DeserializeOwned>(request: &ParsedRequest) -> Result<T, BankError> {
    Ok(serde_json::from_str(request.body().unwrap_or_default())?)
}

fn bearer_token(headers: &Headers) -> Result<&str, BankError> {
    let value = headers.authorization().ok_or(BankError::MissingToken)?;
    value.strip_prefix(BEARER).map(str::trim).filter(|token| !token.is_empty()).ok_or(BankError::InvalidToken)
}

#[async_trait]
impl BankService for InMemoryBank {
    async fn get_balance(&self, request: ParsedRequest) -> Result<Response, ServiceError> {
        let token = bearer_token(request.headers())?;
        let balance = self.balance(token).await?;
        Ok(Response::ok(json!({ "balance": balance }).to_string()))
    }

    async fn signup(&self, request: ParsedRequest) -> Result<Response, ServiceError> {
        let credentials: Credentials = parse_body(&request)?;
        let token = self.register(&credentials.username, &credentials.password).await?;
        Ok(Response::created(json!({ "token": token }).to_string()))
    }

    async fn signin(&self, request: ParsedRequest) -> Result<Response, ServiceError> {
        let credentials: Credentials = parse_body(&request)?;
        let token = self.login(&credentials.username, &credentials.password).await?;
        Ok(Response::ok(json!({ "token": token }).to_string()))
    }

    async fn transfer_money(&self, request: ParsedRequest) -> Result<Response, ServiceError> {
        let token = bearer_token(request.headers())?;
        let transfer: TransferRequest = parse_body(&request)?;
        let balance = self.transfer(token, &transfer.to, transfer.amount).await?;
        Ok(Response::ok(json!({ "message": "Transfer completed", "balance": balance }).to_string()))
    }
}
