use std::env;
use std::sync::Arc;

use bank_http::server::Server;
use bank_service::InMemoryBank;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

const DEFAULT_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_BASE: &str = "bank";
const DEFAULT_INITIAL_BALANCE: u64 = 1_000;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let address = env::var("BANK_ADDRESS").unwrap_or_else(|_| DEFAULT_ADDRESS.to_string());
    let base = env::var("BANK_BASE").unwrap_or_else(|_| DEFAULT_BASE.to_string());
    let initial_balance = match env::var("BANK_INITIAL_BALANCE").map(|value| value.parse::<u64>()) {
        Ok(Ok(balance)) => balance,
        Ok(Err(e)) => {
            error!(cause = %e, "invalid BANK_INITIAL_BALANCE");
            return;
        }
        Err(_) => DEFAULT_INITIAL_BALANCE,
    };

    let server = match Server::builder().address(address.as_str()).base_segment(base).build() {
        Ok(server) => server,
        Err(e) => {
            error!(cause = %e, "invalid server configuration");
            return;
        }
    };

    let listener = match server.listen().await {
        Ok(listener) => listener,
        Err(e) => {
            error!(cause = %e, "can't start server");
            return;
        }
    };

    info!(initial_balance, "bank is open");
    listener.serve(Arc::new(InMemoryBank::with_initial_balance(initial_balance))).await;
}
