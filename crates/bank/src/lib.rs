//! An in-memory banking service for the bank server
//!
//! [`InMemoryBank`] implements [`bank_http::handler::BankService`]: accounts are
//! created with `signup`, sessions are opened with `signin`, and the bearer token
//! returned by either authorizes balance lookups and transfers.
//!
//! | route                | body                                     | success                                              |
//! |----------------------|------------------------------------------|------------------------------------------------------|
//! | `POST /<base>/signup`| `{"username": "..", "password": ".."}`   | `201 {"token": ".."}`                                |
//! | `POST /<base>/signin`| `{"username": "..", "password": ".."}`   | `200 {"token": ".."}`                                |
//! | `GET /<base>/money`  |                                          | `200 {"balance": n}`                                 |
//! | `POST /<base>/money` | `{"to": "..", "amount": n}`              | `200 {"message": "Transfer completed", "balance": n}`|
//!
//! Nothing is persisted. Restarting the process forgets every account.

mod bank;
mod error;
mod model;
mod password;
mod service;

pub use bank::InMemoryBank;
pub use error::BankError;
pub use model::{Credentials, TransferRequest};
