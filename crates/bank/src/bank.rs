//! The in-memory ledger behind the banking routes.
//!
//! Accounts and session tokens share one lock, so a transfer observes and
//! updates both balances atomically with respect to every other operation.

use std::collections::HashMap;

use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::BankError;
use crate::password::PasswordHash;

#[derive(Debug)]
struct Account {
    password: PasswordHash,
    balance: u64,
}

#[derive(Debug, Default)]
struct Ledger {
    accounts: HashMap<String, Account>,
    // token -> username
    tokens: HashMap<String, String>,
}

impl Ledger {
    fn issue_token(&mut self, username: &str) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.tokens.insert(token.clone(), username.to_string());
        token
    }

    fn owner(&self, token: &str) -> Result<String, BankError> {
        self.tokens.get(token).cloned().ok_or(BankError::InvalidToken)
    }
}

/// Accounts, balances and sessions kept in process memory.
///
/// Nothing is persisted and tokens never expire. Every new account starts
/// with the configured initial balance.
#[derive(Debug, Default)]
pub struct InMemoryBank {
    initial_balance: u64,
    ledger: Mutex<Ledger>,
}

impl InMemoryBank {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_initial_balance(initial_balance: u64) -> Self {
        Self { initial_balance, ledger: Mutex::default() }
    }

    pub fn initial_balance(&self) -> u64 {
        self.initial_balance
    }

    /// Creates an account and returns a fresh session token for it.
    pub async fn register(&self, username: &str, password: &str) -> Result<String, BankError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(BankError::BlankCredentials);
        }

        let mut ledger = self.ledger.lock().await;
        if ledger.accounts.contains_key(username) {
            return Err(BankError::UserAlreadyExists);
        }

        let account = Account { password: PasswordHash::new(password), balance: self.initial_balance };
        ledger.accounts.insert(username.to_string(), account);
        info!(username, balance = self.initial_balance, "account created");

        Ok(ledger.issue_token(username))
    }

    /// Checks the credentials and returns a new session token.
    ///
    /// Tokens issued earlier for the same account stay valid.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, BankError> {
        let mut ledger = self.ledger.lock().await;
        let account = ledger.accounts.get(username).ok_or(BankError::NoSuchUser)?;
        if !account.password.verify(password) {
            debug!(username, "wrong password");
            return Err(BankError::WrongPassword);
        }

        Ok(ledger.issue_token(username))
    }

    pub async fn balance(&self, token: &str) -> Result<u64, BankError> {
        let ledger = self.ledger.lock().await;
        let owner = ledger.owner(token)?;
        ledger.accounts.get(&owner).map(|account| account.balance).ok_or(BankError::InvalidToken)
    }

    /// Moves `amount` from the token owner's account to `to`, returning the
    /// owner's remaining balance. Either both balances change or neither does.
    pub async fn transfer(&self, token: &str, to: &str, amount: u64) -> Result<u64, BankError> {
        let mut ledger = self.ledger.lock().await;
        let from = ledger.owner(token)?;

        if amount == 0 {
            return Err(BankError::InvalidAmount);
        }
        if from == to {
            return Err(BankError::SelfTransfer);
        }

        let sender_balance = ledger.accounts.get(&from).map(|account| account.balance).ok_or(BankError::InvalidToken)?;
        let remaining = sender_balance.checked_sub(amount).ok_or(BankError::InsufficientFunds)?;

        let recipient = ledger.accounts.get_mut(to).ok_or(BankError::NoSuchUser)?;
        recipient.balance = recipient.balance.checked_add(amount).ok_or(BankError::InvalidAmount)?;

        if let Some(sender) = ledger.accounts.get_mut(&from) {
            sender.balance = remaining;
        }

        info!(from = %from, to, amount, remaining, "transfer completed");
        Ok(remaining)
    }
}
