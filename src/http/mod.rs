//! HTTP server module.
//!
//! Binds the listener, serves the router and handles graceful shutdown on
//! SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{bind, run, serve, start_server, ServerError};
pub use shutdown::shutdown_signal;
