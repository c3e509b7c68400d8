//! HTTP server module.
//!
//! Serves the router on plain HTTP; TLS is expected to terminate at a reverse
//! proxy or gateway in front of the service. The server drains in-flight
//! requests on SIGTERM/SIGINT before exiting.

mod server;
mod shutdown;
pub mod static_files;

pub use server::{bind, serve, start_server, ServerError};
pub use shutdown::shutdown_signal;
