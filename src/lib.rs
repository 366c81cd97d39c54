//! ferrocat - a small HTTP/1.1 server with cookie sessions
//!
//! Core library: wire parsing, routing, sessions and the bundled app.

pub mod app;
pub mod config;
pub mod http;
pub mod routing;
pub mod server;
pub mod session;
