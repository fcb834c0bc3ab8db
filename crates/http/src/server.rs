//! Listener: binds the configured address and runs the accept loop.
//!
//! ```no_run
//! use std::sync::Arc;
//! use bank_http::handler::BankService;
//! use bank_http::server::Server;
//!
//! async fn run(service: Arc<impl BankService + 'static>) -> Result<(), Box<dyn std::error::Error>> {
//!     let listener = Server::builder().address("127.0.0.1:8080").base_segment("bank").build()?.listen().await?;
//!     listener.serve(service).await;
//!     Ok(())
//! }
//! ```

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::codec::DecoderConfig;
use crate::connection::HttpConnection;
use crate::handler::BankService;

#[derive(Debug)]
pub struct ServerBuilder {
    address: Option<io::Result<Vec<SocketAddr>>>,
    config: DecoderConfig,
}

impl ServerBuilder {
    fn new() -> Self {
        Self { address: None, config: DecoderConfig::default() }
    }

    pub fn address<A: ToSocketAddrs>(mut self, address: A) -> Self {
        self.address = Some(address.to_socket_addrs().map(|addrs| addrs.collect()));
        self
    }

    /// The first target segment every request must start with, `"bank"` unless set.
    pub fn base_segment(mut self, base_segment: impl Into<String>) -> Self {
        self.config.base_segment = base_segment.into();
        self
    }

    pub fn max_line_bytes(mut self, max_line_bytes: usize) -> Self {
        self.config.max_line_bytes = max_line_bytes;
        self
    }

    pub fn max_header_num(mut self, max_header_num: usize) -> Self {
        self.config.max_header_num = max_header_num;
        self
    }

    pub fn max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.config.max_body_bytes = max_body_bytes;
        self
    }

    pub fn build(self) -> Result<Server, ServerError> {
        let address = self
            .address
            .ok_or(ServerError::MissingAddress)?
            .map_err(|source| ServerError::InvalidAddress { source })?;
        Ok(Server { address, config: Arc::new(self.config) })
    }
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("address must be set")]
    MissingAddress,

    #[error("invalid address: {source}")]
    InvalidAddress { source: io::Error },

    #[error("bind server error: {source}")]
    Bind { source: io::Error },
}

/// A configured, not yet bound server.
#[derive(Debug)]
pub struct Server {
    address: Vec<SocketAddr>,
    config: Arc<DecoderConfig>,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::new()
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Binds the listening socket.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] when none of the configured addresses can be bound.
    pub async fn listen(self) -> Result<Listener, ServerError> {
        let tcp_listener = TcpListener::bind(self.address.as_slice()).await.map_err(|source| {
            error!(cause = %source, address = ?self.address, "bind server error");
            ServerError::Bind { source }
        })?;

        info!(address = ?tcp_listener.local_addr().ok(), base_segment = %self.config.base_segment, "start listening");
        Ok(Listener { tcp_listener, config: self.config })
    }
}

/// A bound socket, ready to accept connections.
#[derive(Debug)]
pub struct Listener {
    tcp_listener: TcpListener,
    config: Arc<DecoderConfig>,
}

impl Listener {
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.tcp_listener.local_addr()
    }

    /// Accepts connections forever, handling each on its own task.
    ///
    /// A failed accept is logged and the loop carries on. Connections are never
    /// limited or queued: each one gets a task as soon as it is accepted.
    pub async fn serve<S>(self, service: Arc<S>)
    where
        S: BankService + ?Sized + 'static,
    {
        loop {
            let (tcp_stream, remote_addr) = match self.tcp_listener.accept().await {
                Ok(stream_and_addr) => stream_and_addr,
                Err(e) => {
                    warn!(cause = %e, "failed to accept");
                    continue;
                }
            };

            let service = Arc::clone(&service);
            let config = Arc::clone(&self.config);

            tokio::spawn(async move {
                let (reader, writer) = tcp_stream.into_split();
                let connection = HttpConnection::new(reader, writer, config);
                match connection.process(service).await {
                    Ok(()) => {
                        info!(peer = %remote_addr, "finished process, connection shutdown");
                    }
                    Err(e) => {
                        error!(peer = %remote_addr, cause = %e, "connection has error, connection shutdown");
                    }
                }
            });
        }
    }
}
