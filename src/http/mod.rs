//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 engine: one request per connection, no
//! keep-alive, no chunked encoding.
//!
//! # Architecture
//!
//! - **`wire`**: line-delimited reads over the raw stream
//! - **`parser`**: builds a [`Request`](request::Request) from the wire
//! - **`request`**: the immutable request value
//! - **`cookie`**: `Cookie` / `Set-Cookie` codec
//! - **`response`**: the immutable response value and its builder
//! - **`writer`**: serializes and writes responses
//! - **`connection`**: the per-connection state machine
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────┐
//!        │ AwaitingRequest  │ ← Read and parse the request
//!        └──────┬───────────┘
//!               │ Parsed (malformed / I/O error → dropped)
//!               ▼
//!        ┌──────────────────┐
//!        │    Parsed        │ ← Resolve handler, run it
//!        └──────┬───────────┘
//!               │ Handler returned (error → dropped)
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatched     │ ← Attach guest session cookie if needed
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │  ResponseReady   │ ← Write bytes
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use ferrocat::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! let listener = TcpListener::bind("127.0.0.1:8080").await?;
//! loop {
//!     let (socket, _addr) = listener.accept().await?;
//!     let router = router.clone();
//!     tokio::spawn(async move {
//!         let mut conn = Connection::new(socket, router);
//!         if let Err(e) = conn.run().await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     });
//! }
//! ```

pub mod connection;
pub mod cookie;
pub mod parser;
pub mod request;
pub mod response;
pub mod wire;
pub mod writer;
