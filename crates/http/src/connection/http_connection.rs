use std::sync::Arc;

use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{error, info, warn};

use crate::codec::{DecoderConfig, RequestDecoder, ResponseEncoder};
use crate::handler::{BankService, dispatch};
use crate::protocol::{HttpError, ParseError, Response};

/// One accepted connection and its single request/response exchange.
///
/// `HttpConnection` reads one request, routes it to the [`BankService`], turns
/// any failure into its status response, and writes exactly one response
/// before the streams are dropped.
///
/// # Type Parameters
///
/// * `R`: The async readable stream type
/// * `W`: The async writable stream type
#[derive(Debug)]
pub struct HttpConnection<R, W> {
    framed_read: FramedRead<R, RequestDecoder>,
    framed_write: FramedWrite<W, ResponseEncoder>,
}

impl<R, W> HttpConnection<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, config: Arc<DecoderConfig>) -> Self {
        Self {
            framed_read: FramedRead::with_capacity(reader, RequestDecoder::new(config), 8 * 1024),
            framed_write: FramedWrite::new(writer, ResponseEncoder::new()),
        }
    }

    /// Handles the connection to completion.
    ///
    /// # Errors
    ///
    /// Returns an error when reading the request or writing the response hits an
    /// I/O failure. Malformed requests are not errors here: they are answered
    /// with their status response like any other failure.
    pub async fn process<S>(mut self, service: Arc<S>) -> Result<(), HttpError>
    where
        S: BankService + ?Sized,
    {
        let response = match self.framed_read.next().await {
            Some(Ok(request)) => {
                info!(method = request.method(), path = request.path(), "receive request");
                match dispatch(service.as_ref(), request).await {
                    Ok(response) => response,
                    Err(failure) => {
                        warn!(cause = %failure, "request failed");
                        Response::from(failure)
                    }
                }
            }

            Some(Err(ParseError::Rejected { source })) => {
                warn!(cause = %source, "can't parse request");
                Response::from(source)
            }

            Some(Err(e)) => {
                error!(cause = %e, "can't read request, abandon connection");
                return Err(e.into());
            }

            None => {
                info!("connection closed before a request was read");
                return Ok(());
            }
        };

        let status = response.status();
        self.framed_write.send(response).await?;
        self.framed_write.close().await?;
        info!(status = status.as_u16(), "sent response");

        Ok(())
    }
}
