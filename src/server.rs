//! Connection Server.
//!
//! Each accepted connection serves exactly one request, then the connection is closed.
use std::{
    error::Error,
    fmt,
    io,
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};
use tokio::{
    io::AsyncWriteExt,
    net::{TcpListener, TcpStream},
    sync::Notify,
    task::JoinHandle,
};

use crate::h1::{DEFAULT_BUFFER_CAPACITY, Request, RequestError, read_request_with_capacity};
use crate::http::StatusCode;
use crate::log;
use crate::response::{WriteError, Writer, default_headers};

/// Type erased error returned by a [`Handler`].
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Request handler.
///
/// The handler is given the parsed request and a [`Writer`] over the connection, it is
/// responsible for writing the complete response. The connection is closed when the writer is
/// dropped.
///
/// This trait is implemented for async functions with matching signature:
///
/// ```rust,no_run
/// use tokio::net::TcpStream;
/// use wirehttp::{Request, Writer, StatusCode, server::BoxError};
/// use wirehttp::response::default_headers;
///
/// async fn handle(mut writer: Writer<TcpStream>, _: Request) -> Result<(), BoxError> {
///     writer.write_status_line(StatusCode::Successful).await?;
///     writer.write_headers(&default_headers(5)).await?;
///     writer.write_body(b"Hello").await?;
///     Ok(())
/// }
///
/// # async fn app() -> std::io::Result<()> {
/// let mut server = wirehttp::serve(3000, handle).await?;
/// server.close().await
/// # }
/// ```
pub trait Handler: Send + Sync + 'static {
    fn call(
        &self,
        writer: Writer<TcpStream>,
        request: Request,
    ) -> impl Future<Output = Result<(), BoxError>> + Send;
}

impl<F, Fut> Handler for F
where
    F: Fn(Writer<TcpStream>, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), BoxError>> + Send,
{
    #[inline]
    fn call(
        &self,
        writer: Writer<TcpStream>,
        request: Request,
    ) -> impl Future<Output = Result<(), BoxError>> + Send {
        self(writer, request)
    }
}

// ===== Config =====

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    host: String,
    buffer_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl ServerConfig {
    /// Create default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host to bind to, default to `0.0.0.0`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the initial read buffer capacity of each connection.
    ///
    /// The buffer grows as needed, this only affects how many bytes are read at first.
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity.max(1);
        self
    }
}

// ===== Serve =====

/// Start serving on `port` with default configuration.
///
/// Returns as soon as the listener is bound, the accept loop runs in the background until
/// [`Server::close`] is called.
pub async fn serve<H: Handler>(port: u16, handler: H) -> io::Result<Server> {
    serve_with(ServerConfig::default(), port, handler).await
}

/// Start serving on `port` with given configuration.
pub async fn serve_with<H: Handler>(
    config: ServerConfig,
    port: u16,
    handler: H,
) -> io::Result<Server> {
    let addr = format!("{}:{port}", config.host);
    let listener = match TcpListener::bind(&addr).await {
        Ok(ok) => ok,
        Err(err) => {
            return Err(io::Error::new(
                err.kind(),
                format!("failed to bind \"{addr}\": {err}"),
            ));
        }
    };
    let local_addr = listener.local_addr()?;
    log::info!("listening on {local_addr}");

    let shared = Arc::new(Shared {
        closed: AtomicBool::new(false),
        shutdown: Notify::new(),
    });
    let task = tokio::spawn(accept_loop(
        listener,
        Arc::new(handler),
        config.buffer_capacity,
        Arc::clone(&shared),
    ));

    Ok(Server {
        shared,
        local_addr,
        task: Some(task),
    })
}

#[derive(Debug)]
struct Shared {
    closed: AtomicBool,
    shutdown: Notify,
}

/// Handle to a running server.
///
/// Dropping the handle does not stop the server, use [`Server::close`].
#[derive(Debug)]
pub struct Server {
    shared: Arc<Shared>,
    local_addr: SocketAddr,
    task: Option<JoinHandle<io::Result<()>>>,
}

impl Server {
    /// Returns the address the listener is bound to.
    #[inline]
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Returns `true` if [`close`][Server::close] has been called.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::Acquire)
    }

    /// Stop accepting connections and close the listener.
    ///
    /// Waits for the accept loop to exit. Connections that are already accepted keep running to
    /// completion. Calling `close` more than once is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the error that terminated the accept loop while the server was still running.
    pub async fn close(&mut self) -> io::Result<()> {
        if !self.shared.closed.swap(true, Ordering::AcqRel) {
            log::info!("closing server on {}", self.local_addr);
            self.shared.shutdown.notify_one();
        }

        match self.task.take() {
            Some(task) => match task.await {
                Ok(result) => result,
                Err(err) => Err(io::Error::other(err)),
            },
            None => Ok(()),
        }
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "http://{}", self.local_addr)
    }
}

async fn accept_loop<H: Handler>(
    listener: TcpListener,
    handler: Arc<H>,
    buffer_capacity: usize,
    shared: Arc<Shared>,
) -> io::Result<()> {
    while !shared.closed.load(Ordering::Acquire) {
        let accepted = tokio::select! {
            _ = shared.shutdown.notified() => break,
            accepted = listener.accept() => accepted,
        };

        match accepted {
            Ok((stream, _peer)) => {
                log::debug!("accepted connection from {_peer}");
                tokio::spawn(connection(stream, Arc::clone(&handler), buffer_capacity));
            }
            // listener errors after close are expected
            Err(_) if shared.closed.load(Ordering::Acquire) => break,
            Err(err) => {
                log::error!("failed to accept connection: {err}");
                return Err(err);
            }
        }
    }

    log::info!("server stopped");
    Ok(())
}

async fn connection<H: Handler>(mut stream: TcpStream, handler: Arc<H>, buffer_capacity: usize) {
    let request = read_request_with_capacity(&mut stream, buffer_capacity).await;
    let mut writer = Writer::new(stream);

    match request {
        Ok(request) => {
            log::trace!("{} {}", request.method(), request.target());
            if let Err(_err) = handler.call(writer, request).await {
                log::error!("handler error: {_err}");
            }
        }
        Err(err) if err.is_client_error() => {
            log::debug!("bad request: {err}");
            if let Err(_err) = write_client_error(&mut writer, &err).await {
                log::error!("failed to write error response: {_err}");
            }
        }
        Err(_err) => {
            log::error!("failed to read request: {_err}");
        }
    }
}

async fn write_client_error(
    writer: &mut Writer<TcpStream>,
    err: &RequestError,
) -> Result<(), WriteError> {
    let body = format!("error parsing request: {err}");
    writer.write_status_line(StatusCode::ClientError).await?;
    writer.write_headers(&default_headers(body.len())).await?;
    writer.write_body(body.as_bytes()).await?;
    writer.get_mut().shutdown().await?;
    Ok(())
}
