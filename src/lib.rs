//! HTTP/1.1 message engine.
//!
//! Incremental request parsing, response writing with chunked bodies and trailers, and a
//! connection per task TCP server.
//!
//! ```rust,no_run
//! use tokio::net::TcpStream;
//! use wirehttp::{Request, StatusCode, Writer, response::default_headers, server::BoxError};
//!
//! async fn handle(mut writer: Writer<TcpStream>, request: Request) -> Result<(), BoxError> {
//!     let body = format!("you requested {}", request.target());
//!     writer.write_status_line(StatusCode::Successful).await?;
//!     writer.write_headers(&default_headers(body.len())).await?;
//!     writer.write_body(body.as_bytes()).await?;
//!     Ok(())
//! }
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let mut server = wirehttp::serve(42069, handle).await?;
//!     tokio::signal::ctrl_c().await?;
//!     server.close().await
//! }
//! ```
#![warn(missing_debug_implementations)]

mod log;
mod common;

pub mod headers;
pub mod h1;
pub mod http;
pub mod response;
pub mod server;

pub use common::ParseResult;
pub use h1::{Request, RequestParser, read_request};
pub use headers::HeaderMap;
pub use http::StatusCode;
pub use response::Writer;
pub use server::{Server, ServerConfig, serve, serve_with};
