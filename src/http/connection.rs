use std::sync::Arc;

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::http::cookie::{SESSION_COOKIE, set_cookie_value};
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::wire::WireReader;
use crate::http::writer::ResponseWriter;
use crate::routing::Router;
use crate::session::new_session_id;

/// Why a connection ended without a response.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("handler for {path} failed: {error:#}")]
    Handler { path: String, error: anyhow::Error },
    #[error("i/o error while writing response: {0}")]
    Io(#[from] std::io::Error),
}

/// Drives exactly one request/response exchange over a stream.
pub struct Connection<S> {
    wire: WireReader<S>,
    router: Arc<Router>,
    state: ConnectionState,
}

pub enum ConnectionState {
    AwaitingRequest,
    Parsed(Request),
    Dispatched(Request, Response),
    ResponseReady(ResponseWriter),
    Closed,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
    pub fn new(stream: S, router: Arc<Router>) -> Self {
        Self {
            wire: WireReader::new(stream),
            router,
            state: ConnectionState::AwaitingRequest,
        }
    }

    /// Runs the exchange to completion.
    ///
    /// Any error means nothing was written back; the stream is simply
    /// dropped.
    pub async fn run(&mut self) -> Result<(), ConnectionError> {
        loop {
            // A failed step leaves the connection Closed.
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::AwaitingRequest => {
                    let request = parse_request(&mut self.wire).await?;
                    ConnectionState::Parsed(request)
                }

                ConnectionState::Parsed(request) => {
                    let (request, response) = self.dispatch(request).await?;
                    ConnectionState::Dispatched(request, response)
                }

                ConnectionState::Dispatched(request, response) => {
                    let response = ensure_session_cookie(&request, response);
                    tracing::info!(
                        method = request.method(),
                        path = request.path(),
                        status = response.status_code(),
                        "request handled"
                    );
                    ConnectionState::ResponseReady(ResponseWriter::new(&response))
                }

                ConnectionState::ResponseReady(mut writer) => {
                    writer.write_to_stream(self.wire.get_mut()).await?;
                    self.wire.get_mut().shutdown().await?;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    /// Runs the resolved handler on the blocking pool so slow handlers never
    /// stall the acceptor. Errors and panics both count as handler failure.
    async fn dispatch(&self, request: Request) -> Result<(Request, Response), ConnectionError> {
        let router = Arc::clone(&self.router);
        let path = request.path().to_string();

        let joined = tokio::task::spawn_blocking(move || {
            let result = router.resolve(request.path()).service(&request);
            (request, result)
        })
        .await;

        match joined {
            Ok((request, Ok(response))) => Ok((request, response)),
            Ok((_, Err(error))) => Err(ConnectionError::Handler { path, error }),
            Err(e) => Err(ConnectionError::Handler {
                path,
                error: anyhow::anyhow!("handler panicked: {e}"),
            }),
        }
    }
}

/// Issues a guest `JSESSIONID` cookie when neither the request nor the
/// response already carries one.
pub fn ensure_session_cookie(request: &Request, response: Response) -> Response {
    if request.cookies().has_value(SESSION_COOKIE) || response.has_header("Set-Cookie") {
        return response;
    }

    let session_id = new_session_id();
    tracing::debug!(session_id = %session_id, "issuing guest session cookie");
    response.with_header("Set-Cookie", set_cookie_value(SESSION_COOKIE, &session_id))
}
